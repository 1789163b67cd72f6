use tracing::info;

use crate::Combatant;

/// Fired once per fight, before the player rests and the first round starts.
pub struct FightStartingEvent<'a> {
    pub player: &'a dyn Combatant,
    pub ai: &'a dyn Combatant,
}

pub trait EventDispatcher {
    fn dispatch(&mut self, event: &FightStartingEvent<'_>);
}

impl<F> EventDispatcher for F
where
    F: FnMut(&FightStartingEvent<'_>),
{
    fn dispatch(&mut self, event: &FightStartingEvent<'_>) {
        self(event)
    }
}

/// Default dispatcher: announces the fight on the `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDispatcher;

impl EventDispatcher for TracingDispatcher {
    fn dispatch(&mut self, event: &FightStartingEvent<'_>) {
        info!(
            player = event.player.name(),
            player_hp = event.player.current_health(),
            ai = event.ai.name(),
            ai_hp = event.ai.current_health(),
            "fight starting"
        );
    }
}
