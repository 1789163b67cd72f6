use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Dice, GameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    Sword,
    Bow,
    FireBolt,
}

impl AttackType {
    pub const ALL: [AttackType; 3] = [AttackType::Sword, AttackType::Bow, AttackType::FireBolt];

    pub const fn tag(self) -> &'static str {
        match self {
            AttackType::Sword => "sword",
            AttackType::Bow => "bow",
            AttackType::FireBolt => "fire_bolt",
        }
    }

    /// Raw damage of one attack, before the defender's armor.
    pub fn perform_attack(self, base_damage: i32, dice: &mut Dice) -> i32 {
        match self {
            // Two-handed swing: base plus 2d12.
            AttackType::Sword => base_damage + dice.roll(12) + dice.roll(12),
            // 30% crit chance for triple damage.
            AttackType::Bow => {
                if dice.roll(100) > 70 {
                    base_damage * 3
                } else {
                    base_damage
                }
            }
            // Spell damage ignores the caster's base damage.
            AttackType::FireBolt => dice.roll(10) + dice.roll(10) + dice.roll(10),
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AttackType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttackType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownAttackType(s.to_string()))
    }
}
