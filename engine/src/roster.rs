use crate::{ArmorType, AttackType, Character, CharacterBuilder, GameError};

/// Starting stats and type tags for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypePreset {
    pub name: &'static str,
    pub max_health: i32,
    pub base_damage: i32,
    pub attack_types: &'static [AttackType],
    pub armor: ArmorType,
}

impl ArchetypePreset {
    /// A builder pre-filled with this preset; callers may still override fields.
    pub fn builder(&self) -> CharacterBuilder {
        CharacterBuilder::new()
            .name(self.name)
            .max_health(self.max_health)
            .base_damage(self.base_damage)
            .attack_types(self.attack_types.iter().copied())
            .armor(self.armor)
    }
}

pub static PRESETS: [ArchetypePreset; 4] = [
    ArchetypePreset {
        name: "fighter",
        max_health: 90,
        base_damage: 12,
        attack_types: &[AttackType::Sword],
        armor: ArmorType::Shield,
    },
    ArchetypePreset {
        name: "mage",
        max_health: 70,
        base_damage: 8,
        attack_types: &[AttackType::FireBolt],
        armor: ArmorType::IceBlock,
    },
    ArchetypePreset {
        name: "archer",
        max_health: 80,
        base_damage: 10,
        attack_types: &[AttackType::Bow],
        armor: ArmorType::LeatherArmor,
    },
    ArchetypePreset {
        name: "mage_archer",
        max_health: 75,
        base_damage: 9,
        // TODO: re-add AttackType::Bow once multi-attack balance is decided.
        attack_types: &[AttackType::FireBolt],
        armor: ArmorType::Shield,
    },
];

/// Case-insensitive lookup; surrounding whitespace is ignored, as for tags.
pub fn find_preset(name: &str) -> Option<&'static ArchetypePreset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Build a fresh character from a case-insensitive archetype name.
pub fn create_character(name: &str) -> Result<Character, GameError> {
    let preset = find_preset(name).ok_or_else(|| GameError::UnknownArchetype(name.to_string()))?;
    preset.builder().build()
}

pub fn characters_list() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
