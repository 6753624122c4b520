use fixture_provisioner::{provision, Cli, Outcome, TableDescriptor};
use std::io::Write;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::try_parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());

    if let Err(err) = run(&cli, &mut std::io::stdout()).await {
        error!("Error creating table locally: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    if cli.dry_run {
        let descriptor = TableDescriptor::rooms(&cli.table_name);
        writeln!(out, "{}", serde_json::to_string_pretty(&descriptor)?)?;
        return Ok(());
    }

    info!(
        endpoint = %cli.endpoint,
        region = %cli.region,
        table = %cli.table_name,
        "Creating fixture table"
    );

    match provision(cli).await? {
        Outcome::Created { status } => info!(
            status = status.as_deref().unwrap_or("UNKNOWN"),
            "Created table '{}' locally.",
            cli.table_name
        ),
        Outcome::AlreadyExists => info!("Table '{}' already exists.", cli.table_name),
    }

    Ok(())
}
