use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Winner and loser of a finished fight. Built from the winning side only, so
/// the loser is always the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    winner: Side,
    loser: Side,
}

impl Outcome {
    pub const fn won_by(winner: Side) -> Self {
        Self {
            winner,
            loser: winner.opponent(),
        }
    }

    pub const fn winner(&self) -> Side {
        self.winner
    }

    pub const fn loser(&self) -> Side {
        self.loser
    }
}

/// Running totals for one fight. Only [`crate::Game::play`] mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FightResult {
    rounds: u32,
    damage_dealt: i32,
    damage_received: i32,
    exhausted_turns: u32,
    outcome: Option<Outcome>,
}

impl FightResult {
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Damage the player actually landed on the AI.
    pub fn damage_dealt(&self) -> i32 {
        self.damage_dealt
    }

    /// Damage the AI actually landed on the player.
    pub fn damage_received(&self) -> i32 {
        self.damage_received
    }

    pub fn exhausted_turns(&self) -> u32 {
        self.exhausted_turns
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Side> {
        self.outcome.map(|o| o.winner())
    }

    pub fn loser(&self) -> Option<Side> {
        self.outcome.map(|o| o.loser())
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn add_round(&mut self) {
        self.rounds += 1;
    }

    pub(crate) fn add_exhausted_turn(&mut self) {
        self.exhausted_turns += 1;
    }

    pub(crate) fn add_damage_dealt(&mut self, damage: i32) {
        self.damage_dealt += damage;
    }

    pub(crate) fn add_damage_received(&mut self, damage: i32) {
        self.damage_received += damage;
    }

    pub(crate) fn finish(&mut self, winner: Side) {
        debug_assert!(self.outcome.is_none(), "fight result finished twice");
        self.outcome = Some(Outcome::won_by(winner));
    }
}
