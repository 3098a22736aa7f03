use std::io;

use flashcards::adapter::inbound::cli::command::Cli;
use flashcards::app::Session;
use flashcards::error::Result;
use flashcards::infrastructure::config::settings::Config;
use tracing::{error, info};

fn main() {
    let _ = dotenvy::dotenv();

    let parsed = Cli::parse_lenient(std::env::args());
    let cli = parsed.cli;

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    config.init_logging();
    info!("flashcards starting");

    for flag in &parsed.unknown {
        println!("Unknown flag: {flag}");
    }
    for flag in &parsed.empty {
        println!("Ignoring flag without a value: {flag}");
    }

    if let Err(e) = run(cli, config) {
        error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    info!("flashcards stopped");
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock())
        .with_default_export(cli.export_to.or(config.session.default_export))
        .with_max_add_attempts(config.session.max_add_attempts);

    for path in &cli.import_from {
        session.import_from(path)?;
    }

    let end = session.run()?;
    info!(?end, "session ended");
    Ok(())
}
