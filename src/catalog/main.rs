use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use game_catalog::client::CatalogClient;
use game_catalog::config::ServerConfig;
use game_catalog::model::Game;
use game_catalog::server;
use game_catalog::view::{Browser, MultiplayerMode, SortOrder, ViewFilter, ALL};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;
use args::{BrowseArgs, Cli, Commands, ServeArgs};

const DEFAULT_LOG_FILTER: &str = "game_catalog=info,tower_http=info";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Some(Commands::Serve(args)) => handle_serve(args).await,
        Some(Commands::Browse(args)) => handle_browse(args).await,
        None => handle_serve(ServeArgs::from_env()).await,
    }
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    // Logs go to stderr so `browse` output stays clean on stdout
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn handle_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig::from(args);
    info!(
        db_file = %config.db_file.display(),
        prefix = %config.prefix,
        "starting game catalog"
    );
    let router = server::from_config(&config)
        .with_context(|| format!("opening {}", config.db_file.display()))?;
    let addr = config.bind_addr();
    server::serve(router, &addr)
        .await
        .with_context(|| format!("serving on {}", addr))?;
    Ok(())
}

async fn handle_browse(args: BrowseArgs) -> Result<()> {
    let client = CatalogClient::new(args.url);
    let filter = ViewFilter {
        platform: (args.platform != ALL).then_some(args.platform),
        multiplayer: MultiplayerMode::from_selection(&args.multiplayer),
        russian: args.russian,
        sort: SortOrder::from_selection(&args.sort),
    };
    let mut browser = Browser::default().with_filter(filter);
    let games = browser.refresh(&client, args.search.as_deref()).await;
    print_games(&games);
    Ok(())
}

const NAME_WIDTH: usize = 40;

fn print_games(games: &[Game]) {
    if games.is_empty() {
        println!("No games found.");
        return;
    }

    for game in games {
        let rating = match game.rating {
            Some(r) => format!("{:>4.1}", r).yellow(),
            None => "   -".dimmed(),
        };
        let name: String = if game.name.chars().count() > NAME_WIDTH {
            let mut cut: String = game.name.chars().take(NAME_WIDTH - 1).collect();
            cut.push('…');
            cut
        } else {
            game.name.clone()
        };

        let mut modes = Vec::new();
        if game.multiplayer.has_offline() {
            modes.push(format!("offline {}", game.multiplayer.offline));
        }
        if game.multiplayer.has_online() {
            modes.push(format!("online {}", game.multiplayer.online));
        }

        println!(
            "{}  {:<width$}  {}  {}",
            rating,
            name.bold(),
            game.platforms.join(", "),
            modes.join(" / ").dimmed(),
            width = NAME_WIDTH
        );
    }
}
