//! Training driver binary.
//!
//! Connects to the executor over the named pipes in the working
//! directory (or the directory given as the first argument), runs the
//! reference policy for the configured timestep budget, and prints a
//! coverage report. The executor process must be started separately;
//! the handshake blocks until it announces its action space.

use std::error::Error;
use std::path::PathBuf;

use restcov_channel::{ChannelConfig, FifoLink};
use restcov_env::{CoverageEnv, EnvConfig};
use restcov_train::{catalog, CountGreedy, TrainConfig, Trainer};

fn main() {
    if let Err(e) = run() {
        eprintln!("restcov-train: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let workdir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Ok(apis) = catalog::list_apis(&workdir) {
        println!("APIs under test: {}", apis.join(", "));
    }
    if let Ok(tools) = catalog::list_tools(&workdir) {
        println!("Available tools: {}", tools.join(", "));
    }

    let link = FifoLink::new(ChannelConfig::in_dir(&workdir))?;
    println!("Waiting for the executor to announce its action space...");
    let mut env = CoverageEnv::connect(link, EnvConfig::default())?;
    println!("Received {} operations.", env.action_count());

    let config = TrainConfig::default();
    let mut policy = CountGreedy::new(config.seed, config.epsilon);
    let trainer = Trainer::new(config)?;

    let report = trainer.run(&mut env, &mut policy)?;
    println!(
        "Run complete: {} episodes, {} steps, best coverage {}/{}.",
        report.episodes,
        report.total_steps,
        report.best_covered,
        env.action_count(),
    );
    println!(
        "  terminated: {}, truncated: {}, cumulative reward: {:.1}",
        report.terminated_episodes, report.truncated_episodes, report.cumulative_reward,
    );

    Ok(())
}
