use clap::Parser;
use pattern_showcase::patterns::all_demonstrations;
use pattern_showcase::utils::logger;
use pattern_showcase::{
    CliConfig, OutputFormat, ShowcaseEngine, ShowcaseError, StdoutConsole, Transcript,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pattern-showcase CLI");
    tracing::debug!("CLI config: {:?}", config);

    let showcase = match config.load_showcase_config() {
        Ok(showcase) => showcase,
        Err(e) => fail(&e),
    };

    if config.list {
        for demonstration in all_demonstrations(&showcase) {
            println!("{:<18} {}", demonstration.kind(), demonstration.summary());
        }
        return Ok(());
    }

    let engine = ShowcaseEngine::new(showcase);

    let result = match config.format {
        OutputFormat::Text => engine.run(&mut StdoutConsole::new()).map(|_| None),
        // JSON mode keeps stdout for the report only.
        OutputFormat::Json => engine.run(&mut Transcript::new()).map(Some),
    };

    match result {
        Ok(Some(report)) => match report.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e),
        },
        Ok(None) => {}
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &ShowcaseError) -> ! {
    tracing::error!(
        "❌ Showcase failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
