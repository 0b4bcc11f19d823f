use anyhow::Context;
use clap::Parser;
use ticket_stats::config::cli::{greeting, Command, RunSettings};
use ticket_stats::config::toml_config::OutputFormat;
use ticket_stats::utils::error::ErrorSeverity;
use ticket_stats::utils::{logger, validation::Validate};
use ticket_stats::{CliConfig, DestinationCounter, TicketError, TicketLoader};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Some(Command::Greet { name }) = &config.command {
        println!("{}", greeting(name));
        return Ok(());
    }

    tracing::info!("👋 Welcome to ticket-stats! Counting tickets per destination and period");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    let mut counter = DestinationCounter::new(settings.tally.clone());
    let loader = TicketLoader::new(&settings.file);

    if let Err(e) = loader.load_and_process(&mut counter) {
        exit_with(e);
    }

    print_report(&settings, &counter)
}

fn print_report(settings: &RunSettings, counter: &DestinationCounter) -> anyhow::Result<()> {
    let summary = counter.summary();
    match settings.format {
        OutputFormat::Text => println!("{}", summary),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to serialize summary")?
        ),
    }
    Ok(())
}

fn exit_with(e: TicketError) -> ! {
    tracing::error!(
        "❌ ticket-stats failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
