use tracing::info;

use crate::{ArmorType, AttackType, Character, GameError};

const DEFAULT_NAME: &str = "adventurer";

/// Step-by-step assembly of a [`Character`]. `CharacterBuilder::new()` hands
/// out a fresh builder for every character.
#[derive(Debug, Clone, Default)]
pub struct CharacterBuilder {
    name: Option<String>,
    max_health: Option<i32>,
    base_damage: Option<i32>,
    attack_types: Vec<AttackType>,
    armor: Option<ArmorType>,
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn max_health(mut self, max_health: i32) -> Self {
        self.max_health = Some(max_health);
        self
    }

    pub fn base_damage(mut self, base_damage: i32) -> Self {
        self.base_damage = Some(base_damage);
        self
    }

    /// Replaces any attack types set earlier. Duplicates are dropped.
    pub fn attack_types(mut self, types: impl IntoIterator<Item = AttackType>) -> Self {
        self.attack_types.clear();
        for t in types {
            if !self.attack_types.contains(&t) {
                self.attack_types.push(t);
            }
        }
        self
    }

    pub fn armor(mut self, armor: ArmorType) -> Self {
        self.armor = Some(armor);
        self
    }

    pub fn build(self) -> Result<Character, GameError> {
        let max_health = self
            .max_health
            .ok_or(GameError::IncompleteCharacter("max health"))?;
        let base_damage = self
            .base_damage
            .ok_or(GameError::IncompleteCharacter("base damage"))?;
        if self.attack_types.is_empty() {
            return Err(GameError::IncompleteCharacter("attack types"));
        }
        let armor = self.armor.ok_or(GameError::IncompleteCharacter("armor"))?;
        let name = self.name.unwrap_or_else(|| DEFAULT_NAME.to_string());

        info!(
            name = %name,
            max_health,
            base_damage,
            attack_types = ?self.attack_types,
            armor = %armor,
            "creating a character"
        );
        Ok(Character::new(
            name,
            max_health,
            base_damage,
            self.attack_types,
            armor,
        ))
    }
}
