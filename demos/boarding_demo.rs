// Demonstration: board a cabin with a baseline controller and evaluate it.
//
// Build/run from this repo root:
//   cargo run --example boarding_demo -- --policy back --episodes 50 --rows 10 --seats 5
//   RUST_LOG=smartboard=debug cargo run --example boarding_demo -- --policy random --render

use std::env;

use smartboard::rl::{
    BackToFrontPolicy, BoardingConfig, BoardingEnv, EvaluationMetrics, FrontToBackPolicy,
    Policy, RandomPolicy,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("back");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(25);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let rows: usize = arg_value(&args, "--rows")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let seats: usize = arg_value(&args, "--seats")
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let render = args.iter().any(|a| a == "--render");

    let mut env = match BoardingEnv::new(BoardingConfig::new(rows, seats)) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(seed)),
        "back" => Box::new(BackToFrontPolicy),
        "front" => Box::new(FrontToBackPolicy),
        other => {
            eprintln!(
                "Unknown --policy '{}'; expected 'back', 'front' or 'random'.",
                other
            );
            std::process::exit(2);
        }
    };

    if render {
        if let Err(e) = render_episode(&mut env, policy.as_mut()) {
            eprintln!("episode failed: {}", e);
            std::process::exit(1);
        }
    }

    match EvaluationMetrics::evaluate(&mut env, policy.as_mut(), episodes) {
        Ok(metrics) => println!("{}", metrics),
        Err(e) => {
            eprintln!("evaluation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Plays one episode, printing the cabin after every step.
fn render_episode(env: &mut BoardingEnv, policy: &mut dyn Policy) -> smartboard::BoardingResult<()> {
    let mut obs = env.reset();
    println!("{}", env.snapshot());

    loop {
        let Some(row) = policy.select_row(&obs, &env.action_mask()) else {
            break;
        };
        let result = env.step(row)?;
        println!("Step {} Action: {}", result.time_step, row);
        println!("Observation: {:?}", result.observation);
        println!("Reward: {}\n", result.reward);
        println!("{}", env.snapshot());

        obs = result.observation;
        if result.terminated {
            break;
        }
    }

    println!("Total Reward: {}", env.cumulative_reward());
    Ok(())
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
