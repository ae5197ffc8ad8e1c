use clap::Parser;

use psychomatrix::utils::{logger, validation::Validate};
use psychomatrix::{
    CliConfig, DateParser, DiskFontProvider, Indicator, MatrixRenderer, NumerologyEngine,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting psychomatrix CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // The host enforces the minimum name length; the core has no such rule.
    if cli.name.trim().chars().count() < 2 {
        eprintln!("❌ Name must be at least 2 characters long");
        std::process::exit(1);
    }

    let config = match cli.matrix_config().and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let date = match DateParser::new().parse(&cli.date) {
        Ok(date) => date,
        Err(e) => {
            // The failure kind stays in the logs; users see one message.
            tracing::debug!("date input rejected: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let engine = NumerologyEngine::new(config.engine.counting, config.engine.triples);
    let profile = engine.profile(&date);
    tracing::debug!(
        a1 = profile.additionals.a1,
        a2 = profile.additionals.a2,
        a3 = profile.additionals.a3,
        a4 = profile.additionals.a4,
        life_path = profile.life_path,
        "computed matrix profile"
    );

    let fonts = DiskFontProvider::new(config.fonts.search_paths.clone());
    let renderer = MatrixRenderer::new(&config, fonts);
    let image = renderer.render(&cli.name, &profile)?;

    std::fs::write(&cli.output, image.as_bytes())?;

    tracing::info!("✅ Matrix rendered successfully");
    println!("✅ Matrix for {} ({})", cli.name, date.format_dmy());
    println!("📁 Output saved to: {}", cli.output);
    println!("🔢 Life path number: {}", profile.life_path);
    for indicator in Indicator::ALL {
        println!(
            "   {:?}: {}",
            indicator,
            profile.indicators.value(indicator)
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    }

    Ok(())
}
