use std::rc::Rc;

use tracing::debug;

use crate::events::{EventDispatcher, FightStartingEvent, TracingDispatcher};
use crate::observer::{FightObserver, ObserverId, ObserverRegistry};
use crate::{Character, Combatant, Dice, FightResult, GameError, Side, roster};

/// Runs fights between two combatants and tells subscribers how they ended.
#[derive(Debug)]
pub struct Game<D = TracingDispatcher> {
    dispatcher: D,
    observers: ObserverRegistry,
}

impl Game<TracingDispatcher> {
    pub fn new() -> Self {
        Self::with_dispatcher(TracingDispatcher)
    }
}

impl Default for Game<TracingDispatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: EventDispatcher> Game<D> {
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self {
            dispatcher,
            observers: ObserverRegistry::new(),
        }
    }

    /// Fight until one side drops to 0 HP or below.
    ///
    /// Only the player rests before the first round. The player strikes
    /// first each round and the AI is checked for death before it may
    /// counter, so a lethal player hit ends the fight with no retaliation.
    /// Loops forever if neither side can ever deal damage.
    pub fn play(
        &mut self,
        player: &mut dyn Combatant,
        ai: &mut dyn Combatant,
        dice: &mut Dice,
    ) -> FightResult {
        self.dispatcher.dispatch(&FightStartingEvent {
            player: &*player,
            ai: &*ai,
        });
        player.rest();

        let mut result = FightResult::default();
        loop {
            result.add_round();

            let damage = player.attack(dice);
            if damage == 0 {
                result.add_exhausted_turn();
            }
            let dealt = ai.receive_attack(damage, dice);
            result.add_damage_dealt(dealt);
            debug!(
                round = result.rounds(),
                attacker = player.name(),
                damage,
                dealt,
                defender_hp = ai.current_health(),
                "player attack"
            );

            if ai.is_dead() {
                return self.finish(result, Side::Player);
            }

            let incoming = ai.attack(dice);
            let received = player.receive_attack(incoming, dice);
            result.add_damage_received(received);
            debug!(
                round = result.rounds(),
                attacker = ai.name(),
                damage = incoming,
                dealt = received,
                defender_hp = player.current_health(),
                "ai attack"
            );

            if player.is_dead() {
                return self.finish(result, Side::Ai);
            }
        }
    }

    fn finish(&self, mut result: FightResult, winner: Side) -> FightResult {
        result.finish(winner);
        debug!(?winner, rounds = result.rounds(), "fight over");
        self.observers.notify(&result);
        result
    }

    pub fn subscribe(&mut self, observer: Rc<dyn FightObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    pub fn create_character(&self, name: &str) -> Result<Character, GameError> {
        roster::create_character(name)
    }

    pub fn characters_list(&self) -> Vec<&'static str> {
        roster::characters_list()
    }
}
