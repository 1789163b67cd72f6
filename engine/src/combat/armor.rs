use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Dice, GameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    Shield,
    LeatherArmor,
    IceBlock,
}

impl ArmorType {
    pub const ALL: [ArmorType; 3] = [ArmorType::Shield, ArmorType::LeatherArmor, ArmorType::IceBlock];

    pub const fn tag(self) -> &'static str {
        match self {
            ArmorType::Shield => "shield",
            ArmorType::LeatherArmor => "leather_armor",
            ArmorType::IceBlock => "ice_block",
        }
    }

    /// How much of an incoming `damage` this armor absorbs. May exceed
    /// `damage`; the defender clamps what it actually takes at zero.
    pub fn reduction(self, damage: i32, dice: &mut Dice) -> i32 {
        match self {
            // 20% chance to block the whole hit, otherwise nothing.
            ArmorType::Shield => {
                if dice.roll(100) > 80 {
                    damage
                } else {
                    0
                }
            }
            ArmorType::LeatherArmor => damage.max(0) / 4,
            ArmorType::IceBlock => dice.roll(8) + dice.roll(8),
        }
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ArmorType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArmorType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownArmorType(s.to_string()))
    }
}
