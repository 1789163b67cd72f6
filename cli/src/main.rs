use arena_engine::api::{
    load_config, simulate_fight, simulate_many, FightConfig, FightSummary, ManyStats,
};
use arena_engine::roster::{characters_list, create_character};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Subcommand)]
enum Cmd {
    /// List the available archetypes
    List,
    /// Run one fight between two archetypes
    Fight {
        /// Archetype played by the player (rests before the fight)
        #[arg(long)]
        player: String,
        /// Archetype played by the AI
        #[arg(long)]
        ai: String,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run many fights and report win rates
    Simulate {
        #[arg(long)]
        player: String,
        #[arg(long)]
        ai: String,
        /// Number of fights
        #[arg(long, default_value_t = 1000)]
        trials: u32,
        /// Base seed (trial i uses seed+i)
        #[arg(long, default_value_t = 12345)]
        seed: u64,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run fights described by a JSON or YAML config file
    Run {
        #[arg(long)]
        config: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Serialize a freshly built archetype to JSON (stdout)
    Dump {
        archetype: String,
        /// Pretty-print JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Turn-based duel arena")]
struct Cli {
    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn print_fight(summary: &FightSummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    for line in &summary.log {
        println!("{}", line);
    }
    println!(
        "winner={} loser={} rounds={} player_hp={} ai_hp={}",
        summary.winner, summary.loser, summary.rounds, summary.player_hp_end, summary.ai_hp_end
    );
    Ok(())
}

fn print_many(cfg: &FightConfig, stats: &ManyStats, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }
    println!(
        "{} vs {}: samples={} player_wins={} ai_wins={} win_rate={:.1}% avg_rounds={:.2}",
        cfg.player,
        cfg.ai,
        stats.samples,
        stats.player_wins,
        stats.ai_wins,
        stats.player_win_rate * 100.0,
        stats.avg_rounds
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Cmd::List => {
            for name in characters_list() {
                println!("{}", name);
            }
        }
        Cmd::Fight {
            player,
            ai,
            seed,
            json,
        } => {
            let cfg = FightConfig::new(player, ai, seed);
            let summary = simulate_fight(&cfg)?;
            print_fight(&summary, json)?;
        }
        Cmd::Simulate {
            player,
            ai,
            trials,
            seed,
            json,
        } => {
            let cfg = FightConfig {
                trials,
                ..FightConfig::new(player, ai, seed)
            };
            let stats = simulate_many(&cfg)?;
            print_many(&cfg, &stats, json)?;
        }
        Cmd::Run { config, json } => {
            let cfg = load_config(&config)?;
            if cfg.trials > 1 {
                let stats = simulate_many(&cfg)?;
                print_many(&cfg, &stats, json)?;
            } else {
                let summary = simulate_fight(&cfg)?;
                print_fight(&summary, json)?;
            }
        }
        Cmd::Dump { archetype, pretty } => {
            let character = create_character(&archetype)?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&character)?);
            } else {
                println!("{}", serde_json::to_string(&character)?);
            }
        }
    }
    Ok(())
}
