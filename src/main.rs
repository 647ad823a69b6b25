use airtable_fields::utils::{logger, validation::Validate};
use airtable_fields::{load_env_file, AirtableClient, AirtableConfig, CliConfig, FieldInspector};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ Field inspection failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn run(cli: CliConfig) -> airtable_fields::Result<()> {
    cli.validate()?;
    load_env_file(&cli.env_file)?;

    let config = AirtableConfig::from_env()?;
    config.validate()?;
    tracing::debug!("Airtable config: {:?}", config);

    let inspector = FieldInspector::new(AirtableClient::new(config))
        .with_view(cli.view)
        .with_filter(cli.filter_by_formula);

    let stdout = std::io::stdout();
    inspector.run(&mut stdout.lock()).await?;
    Ok(())
}
