use anyhow::Context;
use clap::Parser;
use merito_fiszki::db::{self, run_migrations, seed::seed_if_empty};
use merito_fiszki::server::app::run_server;
use merito_fiszki::settings::Settings;
use merito_fiszki::telemetry::init_tracing;
use secrecy::ExposeSecret;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(value_enum, default_value = "serve")]
    runner: Runner,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Runner {
    /// Migrate, seed an empty catalog and serve the API
    Serve,
    /// Migrate and seed an empty catalog, then exit
    Seed,
    /// Apply migrations only
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load configuration")?;
    let pool = db::establish_connection(
        settings.database_url.expose_secret(),
        settings.db_max_connections,
    )
    .await
    .context("Cannot connect to DB")?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await.context("Migrations failed")?;

    match cli.runner {
        Runner::Migrate => {}
        Runner::Seed => {
            seed_if_empty(&pool).await.context("Seeding failed")?;
        }
        Runner::Serve => {
            if settings.seed_on_startup {
                seed_if_empty(&pool).await.context("Seeding failed")?;
            }
            run_server(pool.clone(), &settings.bind_address()).await?;
        }
    };

    pool.close().await;
    Ok(())
}
