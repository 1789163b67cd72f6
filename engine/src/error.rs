use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("undefined character '{0}'")]
    UnknownArchetype(String),
    #[error("unknown attack type '{0}'")]
    UnknownAttackType(String),
    #[error("unknown armor type '{0}'")]
    UnknownArmorType(String),
    /// The builder was asked to build before this field was set.
    #[error("character is missing {0}")]
    IncompleteCharacter(&'static str),
}
