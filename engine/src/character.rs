use serde::Serialize;

use crate::{ArmorType, AttackType, Dice};

pub const MAX_STAMINA: i32 = 100;

/// Anything that can stand in a fight.
pub trait Combatant {
    /// Damage of this combatant's next attack. Never negative; zero means the
    /// turn was lost to exhaustion.
    fn attack(&mut self, dice: &mut Dice) -> i32;

    /// Take an incoming attack and return the damage actually applied after
    /// mitigation.
    fn receive_attack(&mut self, damage: i32, dice: &mut Dice) -> i32;

    fn rest(&mut self);

    fn current_health(&self) -> i32;

    fn name(&self) -> &str {
        "combatant"
    }

    fn is_dead(&self) -> bool {
        self.current_health() <= 0
    }
}

/// A character assembled by [`crate::CharacterBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    name: String,
    max_health: i32,
    current_health: i32,
    base_damage: i32,
    attack_types: Vec<AttackType>,
    armor: ArmorType,
    stamina: i32,
}

impl Character {
    pub(crate) fn new(
        name: String,
        max_health: i32,
        base_damage: i32,
        attack_types: Vec<AttackType>,
        armor: ArmorType,
    ) -> Self {
        Self {
            name,
            max_health,
            current_health: max_health,
            base_damage,
            attack_types,
            armor,
            stamina: MAX_STAMINA,
        }
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    pub fn attack_types(&self) -> &[AttackType] {
        &self.attack_types
    }

    pub fn armor(&self) -> ArmorType {
        self.armor
    }

    pub fn stamina(&self) -> i32 {
        self.stamina
    }
}

impl Combatant for Character {
    fn attack(&mut self, dice: &mut Dice) -> i32 {
        self.stamina -= 25 + dice.roll(20);
        if self.stamina <= 0 {
            // Too tired to swing; recovers for next turn.
            self.stamina = MAX_STAMINA;
            return 0;
        }

        let kind = match self.attack_types.as_slice() {
            [] => return 0,
            [only] => *only,
            many => many[dice.pick(many.len())],
        };
        kind.perform_attack(self.base_damage, dice)
    }

    fn receive_attack(&mut self, damage: i32, dice: &mut Dice) -> i32 {
        let reduction = self.armor.reduction(damage, dice);
        let taken = (damage - reduction).max(0);
        self.current_health -= taken;
        taken
    }

    fn rest(&mut self) {
        self.current_health = self.max_health;
        self.stamina = MAX_STAMINA;
    }

    fn current_health(&self) -> i32 {
        self.current_health
    }

    fn name(&self) -> &str {
        &self.name
    }
}
