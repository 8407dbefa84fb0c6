use clap::Parser;
use comps_regress::utils::{logger, validation::Validate};
use comps_regress::{CliConfig, LocalStorage, RegressError, RegressionRunner, RunnerConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger();

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let runner =
        RegressionRunner::from_config(LocalStorage::new(), &config.csv_path, RunnerConfig::default());

    match runner.run() {
        Ok(report) => println!("{}", report),
        Err(e) => fail(&e),
    }
}

fn fail(e: &RegressError) -> ! {
    tracing::error!(
        "❌ Regression failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
