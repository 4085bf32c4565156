use clap::{Parser, Subcommand, ValueEnum};
use engine::api::{plan_encounter, run_battle, BattleConfig, PlanConfig};
use engine::model::{Distance, SceneContext, Side, Terrain};
use engine::{AdMode, Dice, Verbosity};

#[derive(Copy, Clone, ValueEnum)]
enum Adv {
    Normal,
    Advantage,
    Disadvantage,
}

#[derive(Copy, Clone, ValueEnum)]
enum Tier {
    Compact,
    Normal,
    Debug,
}

#[derive(Copy, Clone, ValueEnum)]
enum DistanceArg {
    Close,
    Mid,
    Far,
}

#[derive(Copy, Clone, ValueEnum)]
enum TerrainArg {
    Open,
    Cramped,
    Difficult,
}

#[derive(Copy, Clone, ValueEnum)]
enum SurpriseArg {
    None,
    Player,
    Enemy,
}

#[derive(Subcommand)]
enum Cmd {
    /// Roll a d20 multiple times with optional advantage/disadvantage
    Roll {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Advantage mode
        #[arg(long, value_enum, default_value_t = Adv::Normal)]
        adv: Adv,
        /// Number of rolls
        #[arg(long, default_value_t = 5)]
        rolls: u32,
    },
    /// Run one turn-based battle against a builtin enemy
    Fight {
        /// Builtin entity id (see content/entities/core.json)
        #[arg(long, default_value_t = 1)]
        entity_id: i64,
        /// Player class slug
        #[arg(long, default_value = "fighter")]
        class: String,
        /// Player level
        #[arg(long, default_value_t = 1)]
        level: i32,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        /// Narration tier
        #[arg(long, value_enum, default_value_t = Tier::Compact)]
        verbosity: Tier,
        /// Scripted actions, e.g. --action dodge --action cast:shield
        #[arg(long = "action")]
        actions: Vec<String>,
        /// Starting distance
        #[arg(long, value_enum, default_value_t = DistanceArg::Close)]
        distance: DistanceArg,
        /// Battlefield terrain
        #[arg(long, value_enum, default_value_t = TerrainArg::Open)]
        terrain: TerrainArg,
        /// Which side has surprise
        #[arg(long, value_enum, default_value_t = SurpriseArg::None)]
        surprise: SurpriseArg,
        /// Emit the full report as JSON instead of narration
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Plan a deterministic encounter for an overworld context
    Plan {
        #[arg(long, default_value_t = 1)]
        location_id: i64,
        #[arg(long, default_value_t = 1)]
        level: i32,
        #[arg(long, default_value_t = 0)]
        turn: u64,
        /// Faction slug to bias selection toward
        #[arg(long)]
        faction: Option<String>,
        #[arg(long, default_value_t = 3)]
        max_enemies: usize,
        /// Emit the plan as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Parser)]
#[command(name = "rpg-cli")]
#[command(about = "Turn-based RPG combat and encounter harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn to_mode(a: Adv) -> AdMode {
    match a {
        Adv::Normal => AdMode::Normal,
        Adv::Advantage => AdMode::Advantage,
        Adv::Disadvantage => AdMode::Disadvantage,
    }
}

fn to_verbosity(t: Tier) -> Verbosity {
    match t {
        Tier::Compact => Verbosity::Compact,
        Tier::Normal => Verbosity::Normal,
        Tier::Debug => Verbosity::Debug,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Roll { seed, adv, rolls } => {
            let mode = to_mode(adv);
            let mut dice = Dice::from_seed(seed);
            for i in 1..=rolls {
                let d = dice.d20(mode);
                match d.rolls.1 {
                    Some(alt) => {
                        println!("roll {i}: {} / {alt} -> keep {}", d.rolls.0, d.kept)
                    }
                    None => println!("roll {i}: {}", d.kept),
                }
            }
        }
        Cmd::Fight {
            entity_id,
            class,
            level,
            seed,
            verbosity,
            actions,
            distance,
            terrain,
            surprise,
            json,
        } => {
            let scene = SceneContext {
                distance: match distance {
                    DistanceArg::Close => Distance::Close,
                    DistanceArg::Mid => Distance::Mid,
                    DistanceArg::Far => Distance::Far,
                },
                terrain: match terrain {
                    TerrainArg::Open => Terrain::Open,
                    TerrainArg::Cramped => Terrain::Cramped,
                    TerrainArg::Difficult => Terrain::Difficult,
                },
                surprise: match surprise {
                    SurpriseArg::None => None,
                    SurpriseArg::Player => Some(Side::Player),
                    SurpriseArg::Enemy => Some(Side::Enemy),
                },
            };
            let report = run_battle(BattleConfig {
                entity_id,
                class_name: class,
                level,
                seed,
                verbosity: to_verbosity(verbosity),
                script: actions,
                scene,
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in &report.log {
                    println!("{line}");
                }
                println!(
                    "winner={} rounds={} player_hp={} enemy_hp={} xp=+{}",
                    report.winner,
                    report.rounds,
                    report.player_hp_end,
                    report.enemy_hp_end,
                    report.xp_gained
                );
            }
        }
        Cmd::Plan { location_id, level, turn, faction, max_enemies, json } => {
            let report = plan_encounter(PlanConfig {
                location_id,
                player_level: level,
                world_turn: turn,
                faction_bias: faction,
                max_enemies,
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match &report.definition_id {
                    Some(id) => println!("definition: {id} (seed {})", report.seed),
                    None => println!("no definition matched (seed {})", report.seed),
                }
                for enemy in &report.enemies {
                    println!("  {} (id {}, level {})", enemy.name, enemy.id, enemy.level);
                }
                if report.enemies.is_empty() {
                    println!("  nothing stirs here this turn");
                }
            }
        }
    }
    Ok(())
}
