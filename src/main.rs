use clap::Parser;
use colored::*;
use gitfolio::app::App;
use gitfolio::cli::Cli;
use gitfolio::github::GitHubClient;
use gitfolio::tui;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Keep diagnostics on stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("{}", "Gitfolio".bold().green());
    println!("{}", "=".repeat(50).dimmed());
    println!("Rendering portfolio for {}", cli.username.cyan());
    if cli.token.is_some() {
        println!("{}", "Using authenticated GitHub requests".dimmed());
    }

    let client = GitHubClient::with_base_url(cli.username.clone(), cli.token, &cli.api_url)?;
    let viewport = crossterm::terminal::size().unwrap_or((80, 24));
    let app = App::new(
        cli.username,
        client.profile_url(),
        cli.featured_topic,
        viewport,
    );

    tui::run(app, client).await?;

    println!("{}", "Goodbye".dimmed());
    Ok(())
}
