//! Command-line entry point for the racetrack planner.

use std::io::Write;

use clap::Parser;

use racetrack_lib::{Cli, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        return Err(e.into());
    }
    Ok(())
}
