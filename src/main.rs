use clap::Parser;
use truth_names::utils::logger;
use truth_names::{CliConfig, CodeNamer};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.load_file_config() {
        tracing::error!("❌ Configuration failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let namer = CodeNamer::new(&config);
    let named = namer.describe_all(config.kind, &config.codes);
    println!("{}", namer.render(&named)?);

    Ok(())
}
