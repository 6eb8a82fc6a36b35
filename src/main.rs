use std::io;
use std::process::ExitCode;

use clap::Parser;
use pig_dice::cli::{Args, Notice};
use pig_dice::core::MIN_PLAYERS;
use pig_dice::{PigError, Session};
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr, errors only unless --verbose
    let filter = if args.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let launch = match args.into_launch() {
        Ok(launch) => launch,
        Err(err @ PigError::TooFewPlayers { .. }) => {
            warn!(%err, "not starting");
            println!("Warning: Number of players must be at least {MIN_PLAYERS}.");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for notice in &launch.notices {
        if let Notice::InvalidPlayerCount { raw } = notice {
            warn!(raw = %raw, "ignoring --numPlayers");
        }
        println!("{notice}");
    }

    let rng = launch.config.rng();
    info!(seed = rng.seed(), players = launch.config.player_count, "starting session");

    let mut session = Session::new(launch.config, io::stdin().lock(), io::stdout().lock());
    match session.run(rng) {
        Ok(end) => {
            info!(?end, "session over");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
