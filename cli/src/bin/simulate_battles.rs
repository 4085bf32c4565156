use clap::Parser;
use engine::api::{run_battle, BattleConfig};
use engine::model::SceneContext;
use engine::Verbosity;

#[derive(Parser)]
#[command(name = "simulate-battles")]
#[command(about = "Monte Carlo sim: many turn-based battles vs a builtin enemy")]
struct Args {
    /// Builtin entity id to fight
    #[arg(long, default_value_t = 1)]
    entity_id: i64,

    /// Player class slug
    #[arg(long, default_value = "fighter")]
    class: String,

    /// Player level
    #[arg(long, default_value_t = 1)]
    level: i32,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Scripted actions replayed each trial, e.g. --action dodge
    #[arg(long = "action")]
    actions: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut player_wins = 0u32;
    let mut enemy_wins = 0u32;
    let mut flights = 0u32;
    let mut draws = 0u32;
    let mut rounds_total = 0u64;
    let mut rounds_vec: Vec<u32> = Vec::with_capacity(args.trials as usize);

    for i in 0..args.trials {
        let trial_seed = args.seed.wrapping_add(i as u64);
        let report = run_battle(BattleConfig {
            entity_id: args.entity_id,
            class_name: args.class.clone(),
            level: args.level,
            seed: trial_seed,
            verbosity: Verbosity::Compact,
            script: args.actions.clone(),
            scene: SceneContext::default(),
        })?;

        match report.winner.as_str() {
            "player" => player_wins += 1,
            "enemy" => enemy_wins += 1,
            "fled" => flights += 1,
            _ => draws += 1,
        }
        rounds_total += report.rounds as u64;
        rounds_vec.push(report.rounds);
    }

    rounds_vec.sort_unstable();
    let trials_f = args.trials.max(1) as f64;
    let avg_rounds = rounds_total as f64 / trials_f;
    let median_rounds = if rounds_vec.is_empty() {
        0
    } else {
        let m = rounds_vec.len() / 2;
        if rounds_vec.len() % 2 == 1 {
            rounds_vec[m]
        } else {
            (rounds_vec[m - 1] + rounds_vec[m]) / 2
        }
    };

    println!("simulate-battles results");
    println!("------------------------");
    println!("trials:         {}", args.trials);
    println!("class/level:    {} {}", args.class, args.level);
    println!("entity id:      {}", args.entity_id);
    println!();
    println!("player wins:    {:.1}%", player_wins as f64 / trials_f * 100.0);
    println!("enemy wins:     {:.1}%", enemy_wins as f64 / trials_f * 100.0);
    println!("fled:           {:.1}%", flights as f64 / trials_f * 100.0);
    println!("draws:          {:.1}%", draws as f64 / trials_f * 100.0);
    println!("avg rounds:     {:.2}", avg_rounds);
    println!("median rounds:  {}", median_rounds);

    Ok(())
}
