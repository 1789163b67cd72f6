mod armor;
mod attack;

pub use armor::ArmorType;
pub use attack::AttackType;
