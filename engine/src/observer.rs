use std::{cell::Cell, collections::HashMap, fmt, rc::Rc};

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::{FightResult, Side};

/// Notified synchronously after every finished fight.
pub trait FightObserver {
    fn on_fight_finished(&self, result: &FightResult) -> anyhow::Result<()>;
}

/// Registration token minted by [`ObserverRegistry::subscribe`]. Never reused
/// within one registry, even after the observer is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Identity of the observer allocation. Only meaningful while the registry
/// holds the `Rc`, which keeps the address from being reused.
fn address_of<T: FightObserver + ?Sized>(observer: &Rc<T>) -> usize {
    Rc::as_ptr(observer).cast::<()>() as usize
}

/// Ordered observer set; iteration follows subscription order.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: IndexMap<ObserverId, Rc<dyn FightObserver>>,
    by_address: HashMap<usize, ObserverId>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribing an already registered observer keeps its original slot
    /// and returns its existing token.
    pub fn subscribe(&mut self, observer: Rc<dyn FightObserver>) -> ObserverId {
        let address = address_of(&observer);
        if let Some(&id) = self.by_address.get(&address) {
            return id;
        }
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.by_address.insert(address, id);
        self.observers.insert(id, observer);
        id
    }

    /// Returns `false` when `id` is not currently subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.observers.shift_remove(&id) {
            Some(observer) => {
                self.by_address.remove(&address_of(&observer));
                true
            }
            None => false,
        }
    }

    /// Token of `observer` if this registry currently holds it.
    pub fn id_of<T: FightObserver + ?Sized>(&self, observer: &Rc<T>) -> Option<ObserverId> {
        self.by_address.get(&address_of(observer)).copied()
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.observers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `result` to every observer. A failing observer is logged and
    /// skipped; the rest still hear about the fight. Returns the failure count.
    pub fn notify(&self, result: &FightResult) -> usize {
        let mut failures = 0;
        for (id, observer) in &self.observers {
            if let Err(err) = observer.on_fight_finished(result) {
                failures += 1;
                warn!(observer = ?id, error = %err, "fight observer failed");
            }
        }
        failures
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.observers.keys()).finish()
    }
}

/// Win/round counters across many fights.
#[derive(Debug, Default)]
pub struct FightTally {
    fights: Cell<u32>,
    player_wins: Cell<u32>,
    ai_wins: Cell<u32>,
    rounds: Cell<u64>,
}

impl FightTally {
    pub fn fights(&self) -> u32 {
        self.fights.get()
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins.get()
    }

    pub fn ai_wins(&self) -> u32 {
        self.ai_wins.get()
    }

    pub fn total_rounds(&self) -> u64 {
        self.rounds.get()
    }
}

impl FightObserver for FightTally {
    fn on_fight_finished(&self, result: &FightResult) -> anyhow::Result<()> {
        let winner = result
            .winner()
            .ok_or_else(|| anyhow::anyhow!("fight result has no winner"))?;
        self.fights.set(self.fights.get() + 1);
        self.rounds.set(self.rounds.get() + u64::from(result.rounds()));
        match winner {
            Side::Player => self.player_wins.set(self.player_wins.get() + 1),
            Side::Ai => self.ai_wins.set(self.ai_wins.get() + 1),
        }
        Ok(())
    }
}

/// Writes each finished fight to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct FightLogger;

impl FightObserver for FightLogger {
    fn on_fight_finished(&self, result: &FightResult) -> anyhow::Result<()> {
        info!(
            winner = ?result.winner(),
            rounds = result.rounds(),
            damage_dealt = result.damage_dealt(),
            damage_received = result.damage_received(),
            exhausted_turns = result.exhausted_turns(),
            "fight finished"
        );
        Ok(())
    }
}
