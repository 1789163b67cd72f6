use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod builder;
pub mod character;
pub mod combat;
pub mod error;
pub mod events;
pub mod game;
pub mod observer;
pub mod result;
pub mod roster;

pub use builder::CharacterBuilder;
pub use character::{Character, Combatant, MAX_STAMINA};
pub use combat::{ArmorType, AttackType};
pub use error::GameError;
pub use events::{EventDispatcher, FightStartingEvent, TracingDispatcher};
pub use game::Game;
pub use observer::{FightLogger, FightObserver, FightTally, ObserverId, ObserverRegistry};
pub use result::{FightResult, Outcome, Side};
pub use roster::{characters_list, create_character};

/// Seeded dice. Every random decision in a fight goes through one of these,
/// so the same seed replays the same fight.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Roll one die with `sides` faces, returning `1..=sides`.
    pub fn roll(&mut self, sides: u32) -> i32 {
        self.rng.gen_range(1..=sides.max(1)) as i32
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    pub fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }
}
