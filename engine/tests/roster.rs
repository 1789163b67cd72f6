use arena_engine::roster::{PRESETS, find_preset};
use arena_engine::{
    ArmorType, AttackType, CharacterBuilder, Combatant, Dice, GameError, MAX_STAMINA,
    characters_list, create_character,
};

#[test]
fn name_matching_ignores_case() {
    let c = create_character("FIGHTER").unwrap();
    assert_eq!(c.max_health(), 90);
    assert_eq!(c.base_damage(), 12);
    assert_eq!(c.current_health(), 90);
    assert_eq!(c.name(), "fighter");
}

#[test]
fn archetype_names_ignore_surrounding_whitespace_like_tags() {
    assert_eq!(create_character(" fighter\n").unwrap().max_health(), 90);
    assert_eq!(" bow ".parse::<AttackType>().unwrap(), AttackType::Bow);
    assert_eq!(
        create_character(" wizard ").unwrap_err(),
        GameError::UnknownArchetype(" wizard ".into())
    );
}

#[test]
fn unknown_archetype_is_rejected() {
    let err = create_character("wizard").unwrap_err();
    assert_eq!(err, GameError::UnknownArchetype("wizard".into()));
    assert!(err.to_string().contains("undefined character"));
}

#[test]
fn preset_table_matches_roster() {
    let check = |name: &str, hp: i32, dmg: i32, attacks: &[AttackType], armor: ArmorType| {
        let c = create_character(name).unwrap();
        assert_eq!(c.max_health(), hp, "{name}");
        assert_eq!(c.base_damage(), dmg, "{name}");
        assert_eq!(c.attack_types(), attacks, "{name}");
        assert_eq!(c.armor(), armor, "{name}");
    };
    check("fighter", 90, 12, &[AttackType::Sword], ArmorType::Shield);
    check("archer", 80, 10, &[AttackType::Bow], ArmorType::LeatherArmor);
    check("mage", 70, 8, &[AttackType::FireBolt], ArmorType::IceBlock);
    check("mage_archer", 75, 9, &[AttackType::FireBolt], ArmorType::Shield);
}

#[test]
fn listing_order_is_stable() {
    insta::assert_snapshot!(characters_list().join(", "), @"fighter, mage, archer, mage_archer");
    assert_eq!(PRESETS.len(), 4);
    assert!(find_preset("Mage_Archer").is_some());
}

#[test]
fn builder_requires_every_field() {
    let err = CharacterBuilder::new()
        .max_health(10)
        .base_damage(2)
        .armor(ArmorType::Shield)
        .build()
        .unwrap_err();
    assert_eq!(err, GameError::IncompleteCharacter("attack types"));

    let err = CharacterBuilder::new()
        .base_damage(2)
        .attack_types([AttackType::Bow])
        .armor(ArmorType::Shield)
        .build()
        .unwrap_err();
    assert_eq!(err, GameError::IncompleteCharacter("max health"));
}

#[test]
fn builder_drops_duplicate_attack_types() {
    let c = CharacterBuilder::new()
        .name("twin")
        .max_health(10)
        .base_damage(2)
        .attack_types([AttackType::Bow, AttackType::Bow, AttackType::Sword])
        .armor(ArmorType::IceBlock)
        .build()
        .unwrap();
    assert_eq!(c.attack_types(), &[AttackType::Bow, AttackType::Sword]);
    assert_eq!(c.name(), "twin");
}

#[test]
fn tags_parse_case_insensitively() {
    assert_eq!("Fire_Bolt".parse::<AttackType>().unwrap(), AttackType::FireBolt);
    assert_eq!("LEATHER_ARMOR".parse::<ArmorType>().unwrap(), ArmorType::LeatherArmor);
    assert_eq!(
        "axe".parse::<AttackType>().unwrap_err(),
        GameError::UnknownAttackType("axe".into())
    );
    assert!("plate".parse::<ArmorType>().is_err());
    assert_eq!(AttackType::FireBolt.to_string(), "fire_bolt");
}

#[test]
fn damage_ranges_follow_attack_type() {
    let mut dice = Dice::from_seed(9);
    for _ in 0..200 {
        let sword = AttackType::Sword.perform_attack(12, &mut dice);
        assert!((14..=36).contains(&sword));
        let bow = AttackType::Bow.perform_attack(10, &mut dice);
        assert!(bow == 10 || bow == 30);
        let bolt = AttackType::FireBolt.perform_attack(99, &mut dice);
        assert!((3..=30).contains(&bolt));
    }
}

#[test]
fn armor_reductions() {
    let mut dice = Dice::from_seed(9);
    assert_eq!(ArmorType::LeatherArmor.reduction(21, &mut dice), 5);
    for _ in 0..200 {
        let shield = ArmorType::Shield.reduction(17, &mut dice);
        assert!(shield == 0 || shield == 17);
        let ice = ArmorType::IceBlock.reduction(17, &mut dice);
        assert!((2..=16).contains(&ice));
    }
}

#[test]
fn received_damage_never_goes_below_zero() {
    let mut mage = create_character("mage").unwrap();
    let mut dice = Dice::from_seed(5);
    for _ in 0..50 {
        let before = mage.current_health();
        let taken = mage.receive_attack(1, &mut dice);
        assert_eq!(taken, 0);
        assert_eq!(mage.current_health(), before);
    }
}

#[test]
fn stamina_runs_out_and_recovers() {
    let mut fighter = create_character("fighter").unwrap();
    let mut dice = Dice::from_seed(11);
    // Each swing costs 26..=45 stamina, so one of the first four must be exhausted.
    let hits: Vec<i32> = (0..4).map(|_| fighter.attack(&mut dice)).collect();
    assert!(hits.contains(&0));
    fighter.rest();
    assert_eq!(fighter.stamina(), MAX_STAMINA);
    assert_eq!(fighter.current_health(), fighter.max_health());
}
