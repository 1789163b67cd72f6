use std::{fs, path::Path, rc::Rc};

use anyhow::{Context, Result, bail};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::events::FightStartingEvent;
use crate::{Combatant, Dice, FightTally, Game, Side, roster};

fn default_trials() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FightConfig {
    pub player: String,
    pub ai: String,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_trials")]
    pub trials: u32,
}

impl FightConfig {
    pub fn new(player: impl Into<String>, ai: impl Into<String>, seed: u64) -> Self {
        Self {
            player: player.into(),
            ai: ai.into(),
            seed,
            trials: default_trials(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` / `.yml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

pub fn parse_config(text: &str, format: ConfigFormat) -> Result<FightConfig> {
    let cfg: FightConfig = match format {
        ConfigFormat::Json => serde_json::from_str(text).context("failed to parse fight config JSON")?,
        ConfigFormat::Yaml => serde_yaml::from_str(text).context("failed to parse fight config YAML")?,
    };
    Ok(cfg)
}

/// Decode config bytes, honouring a UTF-8/UTF-16 byte-order mark when present.
fn decode_text(bytes: &[u8]) -> String {
    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _, _) = enc.decode(&bytes[bom_len..]);
        return text.into_owned();
    }
    let (text, _, _) = encoding_rs::UTF_8.decode(bytes);
    text.into_owned()
}

pub fn load_config(path: &Path) -> Result<FightConfig> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read fight config: {}", path.display()))?;
    let text = decode_text(&bytes);
    parse_config(&text, ConfigFormat::from_path(path))
        .with_context(|| format!("invalid fight config: {}", path.display()))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FightSummary {
    pub player: String,
    pub ai: String,
    pub winner_side: Side,
    pub winner: String,
    pub loser: String,
    pub rounds: u32,
    pub damage_dealt: i32,
    pub damage_received: i32,
    pub exhausted_turns: u32,
    pub player_hp_end: i32,
    pub ai_hp_end: i32,
    pub log: Vec<String>,
}

pub fn simulate_fight(cfg: &FightConfig) -> Result<FightSummary> {
    let mut player = roster::create_character(&cfg.player)
        .with_context(|| format!("cannot create player '{}'", cfg.player))?;
    let mut ai = roster::create_character(&cfg.ai)
        .with_context(|| format!("cannot create ai '{}'", cfg.ai))?;

    let mut logs = Vec::new();
    let mut dice = Dice::from_seed(cfg.seed);
    let result = {
        let mut game = Game::with_dispatcher(|event: &FightStartingEvent<'_>| {
            logs.push(format!(
                "[START] {} (HP {}) vs {} (HP {})",
                event.player.name(),
                event.player.current_health(),
                event.ai.name(),
                event.ai.current_health()
            ));
        });
        game.play(&mut player, &mut ai, &mut dice)
    };

    let Some(outcome) = result.outcome() else {
        bail!("fight ended without a winner");
    };
    let name_of = |side: Side| match side {
        Side::Player => cfg.player.trim().to_lowercase(),
        Side::Ai => cfg.ai.trim().to_lowercase(),
    };
    let winner = name_of(outcome.winner());
    let loser = name_of(outcome.loser());

    logs.push(format!(
        "[END] winner={} ({:?}) rounds={} dealt={} received={} exhausted={}",
        winner,
        outcome.winner(),
        result.rounds(),
        result.damage_dealt(),
        result.damage_received(),
        result.exhausted_turns()
    ));

    Ok(FightSummary {
        player: cfg.player.trim().to_lowercase(),
        ai: cfg.ai.trim().to_lowercase(),
        winner_side: outcome.winner(),
        winner,
        loser,
        rounds: result.rounds(),
        damage_dealt: result.damage_dealt(),
        damage_received: result.damage_received(),
        exhausted_turns: result.exhausted_turns(),
        player_hp_end: player.current_health(),
        ai_hp_end: ai.current_health(),
        log: logs,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ManyStats {
    pub samples: u32,
    pub player_wins: u32,
    pub ai_wins: u32,
    pub avg_rounds: f64,
    pub player_win_rate: f64,
}

/// Run `cfg.trials` fights; trial `i` uses seed `cfg.seed + i`.
pub fn simulate_many(cfg: &FightConfig) -> Result<ManyStats> {
    if cfg.trials == 0 {
        bail!("trials must be at least 1");
    }
    // Fail fast on bad names before any fight runs.
    roster::create_character(&cfg.player)
        .with_context(|| format!("cannot create player '{}'", cfg.player))?;
    roster::create_character(&cfg.ai)
        .with_context(|| format!("cannot create ai '{}'", cfg.ai))?;

    let tally = Rc::new(FightTally::default());
    let mut game = Game::new();
    game.subscribe(tally.clone());

    for i in 0..cfg.trials {
        let mut player = roster::create_character(&cfg.player)?;
        let mut ai = roster::create_character(&cfg.ai)?;
        let mut dice = Dice::from_seed(cfg.seed.wrapping_add(u64::from(i)));
        game.play(&mut player, &mut ai, &mut dice);
    }

    let samples = tally.fights();
    let avg_rounds = tally.total_rounds() as f64 / f64::from(samples.max(1));
    Ok(ManyStats {
        samples,
        player_wins: tally.player_wins(),
        ai_wins: tally.ai_wins(),
        avg_rounds,
        player_win_rate: f64::from(tally.player_wins()) / f64::from(samples.max(1)),
    })
}
