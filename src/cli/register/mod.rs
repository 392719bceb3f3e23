//! Register command - runs one candidate through the registration pipeline

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::user::UserRecord;
use crate::infrastructure::logging;
use crate::infrastructure::user::{create_repository, UserRegistrationService};

/// Arguments for the register command
#[derive(Args, Clone, Debug)]
pub struct RegisterArgs {
    /// JSON file holding the candidate record (reads stdin when omitted)
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

/// Register the candidate and print the persisted record as JSON
pub async fn run(args: RegisterArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging);

    let input = read_input(args.file.as_ref())?;
    let candidate = parse_candidate(&input)?;

    let repository = create_repository(&config.storage).await?;
    let service = UserRegistrationService::new(repository);

    let record = service.register(candidate).await?;
    info!(id = record.id.as_deref().unwrap_or_default(), "Record persisted");

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Parse a candidate. Empty input and JSON `null` both mean no candidate.
fn parse_candidate(input: &str) -> anyhow::Result<Option<UserRecord>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(input).context("Candidate is not a valid user record")
}
