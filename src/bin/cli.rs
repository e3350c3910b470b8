use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use merito_fiszki::db::{self, queries::questions::delete_question, run_migrations};
use merito_fiszki::settings::Settings;
use merito_fiszki::telemetry::init_tracing;
use merito_fiszki::transfer::{export_catalog, import_catalog};
use secrecy::{ExposeSecret, SecretString};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database URL, overrides DATABASE_URL
    #[clap(long)]
    database_url: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import questions.csv and answers.csv into the catalog
    Import { path: PathBuf },
    /// Export the catalog to questions.csv and answers.csv
    Export { path: PathBuf },
    /// Delete a question together with its answers
    DeleteQuestion { question_id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load configuration")?;
    let database_url = cli
        .database_url
        .map(SecretString::from)
        .unwrap_or(settings.database_url);

    let pool = db::establish_connection(database_url.expose_secret(), 1)
        .await
        .context("Cannot connect to DB")?;
    run_migrations(&pool).await.context("Migrations failed")?;

    match cli.command {
        Commands::Export { path } => {
            export_catalog(&pool, &path).await.context("Cannot export")?;
        }
        Commands::Import { path } => {
            import_catalog(&pool, &path).await.context("Cannot import")?;
        }
        Commands::DeleteQuestion { question_id } => {
            let mut conn = pool.acquire().await?;
            if delete_question(&mut conn, question_id).await? {
                tracing::info!("Deleted question {question_id}");
            } else {
                anyhow::bail!("Question {question_id} does not exist");
            }
        }
    }

    pool.close().await;
    Ok(())
}
