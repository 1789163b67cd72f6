use assert_cmd::Command;
use predicates::prelude::*;

fn arena() -> Command {
    Command::cargo_bin("arena").expect("arena binary built")
}

#[test]
fn list_prints_every_archetype() {
    arena()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("fighter").and(predicate::str::contains("mage_archer")));
}

#[test]
fn fight_reports_a_winner() {
    arena()
        .args(["fight", "--player", "FIGHTER", "--ai", "archer", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[START]").and(predicate::str::contains("winner=")));
}

#[test]
fn fight_json_is_parseable() {
    let out = arena()
        .args(["fight", "--player", "mage", "--ai", "archer", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(v["rounds"].as_u64().unwrap() >= 1);
}

#[test]
fn unknown_archetype_fails() {
    arena()
        .args(["fight", "--player", "wizard", "--ai", "mage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined character"));
}

#[test]
fn simulate_prints_win_rate() {
    arena()
        .args(["simulate", "--player", "archer", "--ai", "mage", "--trials", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("samples=25"));
}

#[test]
fn run_reads_yaml_config_with_bom() {
    let dir = std::env::temp_dir().join(format!("arena-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("fight.yaml");
    std::fs::write(&path, "\u{feff}player: mage\nai: fighter\nseed: 3\ntrials: 10\n").unwrap();

    arena()
        .args(["run", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("samples=10"));
}

#[test]
fn dump_serializes_the_preset() {
    arena()
        .args(["dump", "mage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""armor":"ice_block""#));
}

#[test]
fn dump_pretty_prints_on_request() {
    arena()
        .args(["dump", " Archer", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""armor": "leather_armor""#));
}

#[test]
fn dump_rejects_unknown_archetype() {
    arena()
        .args(["dump", "wizard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("undefined character"));
}
