use std::path::{Path, PathBuf};

use billiards::{
    compute_shot, generate_layout, init_logging, select_balls, transport::Transport, DetectionFrame,
    Message, ShotPlan, ShotSolver, SolverInput, Table, TargetRule, TcpTransport, DEFAULT_TABLE,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Geometric billiard shot planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a randomly generated table layout and print the plan.
    Random {
        #[arg(long, default_value_t = 3)]
        obstacles: usize,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Plan a shot from a detector JSON file and print the result.
    Plan {
        /// Path to the detector output (`{"balls": [...]}`).
        json: PathBuf,
        #[arg(long, help = "Target ball number, or 'min' for the lowest on the table")]
        target: Option<String>,
    },
    /// Plan from a detector JSON file and deliver the result to the
    /// stroke controller over TCP.
    Send {
        json: PathBuf,
        #[arg(long, default_value = "127.0.0.1:4000")]
        connect: String,
        #[arg(long)]
        target: Option<String>,
    },
    /// Stay connected to the controller and answer each shot request
    /// from the latest detector file.
    Session {
        json: PathBuf,
        #[arg(long, default_value = "127.0.0.1:4000")]
        connect: String,
        #[arg(long)]
        target: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Random { obstacles, seed } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let table = Table::new(DEFAULT_TABLE.0, DEFAULT_TABLE.1)?;
            let layout = generate_layout(&mut rng, &table, obstacles)?;
            println!(
                "cue = ({:.4}, {:.4}), target = ({:.4}, {:.4}), {} obstacle(s)",
                layout.cue.x,
                layout.cue.y,
                layout.target.x,
                layout.target.y,
                layout.obstacles.len()
            );
            let solver = ShotSolver::new(table);
            match compute_shot(&solver, layout.cue, layout.target, &layout.obstacles) {
                Some(plan) => println!("{}", serde_json::to_string_pretty(&plan)?),
                None => println!("no feasible shot"),
            }
        }
        Commands::Plan { json, target } => {
            let rule = parse_rule(target.as_deref())?;
            let (plan, input) = plan_from_file(&json, rule)?;
            match plan {
                Some(plan) => {
                    println!("{}", serde_json::to_string_pretty(&plan)?);
                    println!(
                        "angle_deg = {:.2}, cue = ({:.3} m, {:.3} m)",
                        plan.angle_deg, input.cue.x, input.cue.y
                    );
                }
                None => println!("no feasible shot"),
            }
        }
        Commands::Send {
            json,
            connect,
            target,
        } => {
            let rule = parse_rule(target.as_deref())?;
            let (plan, _) = plan_from_file(&json, rule)?;
            let mut transport = TcpTransport::connect_with_retry(connect.as_str()).await?;
            transport.send(to_message(plan)).await?;
        }
        Commands::Session {
            json,
            connect,
            target,
        } => {
            let rule = parse_rule(target.as_deref())?;
            let mut transport = TcpTransport::connect_with_retry(connect.as_str()).await?;
            loop {
                match transport.recv().await? {
                    Message::Shoot => {
                        let (plan, _) = plan_from_file(&json, rule)?;
                        transport.send(to_message(plan)).await?;
                    }
                    Message::Exit => {
                        log::info!("controller closed the session");
                        break;
                    }
                    other => log::warn!("ignoring unexpected message: {:?}", other),
                }
            }
        }
    }
    Ok(())
}

fn parse_rule(arg: Option<&str>) -> anyhow::Result<TargetRule> {
    match arg {
        None => Ok(TargetRule::HighestConfidence),
        Some("min") => Ok(TargetRule::LowestNumber),
        Some(s) => s.parse().map(TargetRule::Number).map_err(|_| {
            anyhow::anyhow!("target must be a ball number or 'min', got {:?}", s)
        }),
    }
}

fn plan_from_file(
    path: &Path,
    rule: TargetRule,
) -> anyhow::Result<(Option<ShotPlan>, SolverInput)> {
    let raw = std::fs::read_to_string(path)?;
    let frame: DetectionFrame = serde_json::from_str(&raw)?;
    let input = select_balls(&frame, rule)?;
    let table = Table::new(DEFAULT_TABLE.0, DEFAULT_TABLE.1)?;
    let solver = ShotSolver::new(table);
    let plan = compute_shot(&solver, input.cue, input.target, &input.obstacles);
    Ok((plan, input))
}

fn to_message(plan: Option<ShotPlan>) -> Message {
    match plan {
        Some(plan) => Message::Plan(plan),
        None => Message::NoPath,
    }
}
