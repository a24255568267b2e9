use std::{env, fs::File, path::Path};

use stake_balance_engine::{
    config, dlq::LogDLQ, domain::StakingContext, engine::Engine, ingestion::CsvReader,
    output_repository::StdOutOutput, submitter::DryRunSubmitter,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let (Some(context_path), Some(requests_path)) = (args.next(), args.next()) else {
        return Err("usage: stake_balance_engine <context.json> <requests.csv>".into());
    };

    let config = config::fetch_config()?;

    let context_file = File::open(Path::new(&context_path))?;
    let context: StakingContext = serde_json::from_reader(context_file)?;

    let requests = File::open(Path::new(&requests_path))?;
    let ingestion = CsvReader::new(requests)?;

    let output = StdOutOutput::new(config.clone());
    let mut engine = Engine::new(
        ingestion,
        output,
        LogDLQ::default(),
        DryRunSubmitter::default(),
        config,
    );

    engine.process(&context).await?;
    engine.flush();

    Ok(())
}
