use clap::{Args, Parser, Subcommand};
use game_catalog::client::DEFAULT_BASE_URL;
use game_catalog::config::{self, ServerConfig};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "game-catalog", bin_name = "game-catalog", version = get_version())]
#[command(about = "Game catalog server and browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the catalog over HTTP (default)
    Serve(ServeArgs),

    /// Fetch the catalog from a running server and print a filtered view
    #[command(alias = "ls")]
    Browse(BrowseArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "CATALOG_HOST", default_value = config::DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// JSON file holding the collection (created if missing)
    #[arg(long, env = "DB_FILE", default_value = config::DEFAULT_DB_FILE)]
    pub db_file: PathBuf,

    /// Resource prefix the collection is served under
    #[arg(long, env = "API_PREFIX", default_value = config::DEFAULT_PREFIX)]
    pub prefix: String,
}

impl ServeArgs {
    /// Serve options taken from the environment and defaults only, for a bare
    /// `game-catalog` invocation.
    pub fn from_env() -> Self {
        #[derive(Parser)]
        struct Bare {
            #[command(flatten)]
            args: ServeArgs,
        }
        Bare::parse_from(["game-catalog"]).args
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
            db_file: args.db_file,
            prefix: String::new(),
        }
        .with_prefix(&args.prefix)
    }
}

#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Collection URL of a running server
    #[arg(long, env = "CATALOG_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Server-side name search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only games on this platform ("all" for any)
    #[arg(long, default_value = "all")]
    pub platform: String,

    /// Multiplayer mode: all, offline or online
    #[arg(long, default_value = "all", value_parser = ["all", "offline", "online"])]
    pub multiplayer: String,

    /// Only games with Russian language support
    #[arg(long)]
    pub russian: bool,

    /// Sort order: none or rating
    #[arg(long, default_value = "none", value_parser = ["none", "rating"])]
    pub sort: String,
}
