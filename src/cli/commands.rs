//! CLI command implementations and the configuration file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::StaticCredentials;
use crate::export as export_aggregator;
use crate::http_server::{AssetState, HttpServer, HttpServerConfig};
use crate::store::{EntityKind, RecordStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure (JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory holding the backing files (required)
    pub data_dir: String,

    /// Directory of the static browser client (default: "./public")
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// HTTP bind and CORS settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Login credential pair
    #[serde(default)]
    pub credentials: CredentialConfig,
}

/// The single login credential pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_public_dir() -> String {
    "./public".to_string()
}

fn default_username() -> String {
    "BAKIM".to_string()
}

fn default_password() -> String {
    "MAXIME".to_string()
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("failed to read {}: {}", path.display(), e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_dir.is_empty() {
            return Err(CliError::Config("data_dir must not be empty".to_string()));
        }
        if self.credentials.username.is_empty() || self.credentials.password.is_empty() {
            return Err(CliError::Config(
                "credentials must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Data directory as a path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Export { config } => export(&config),
    }
}

/// Whether both backing files already exist.
fn is_initialized(data_dir: &Path) -> bool {
    data_dir.join(EntityKind::Spindle.file_name()).exists()
        && data_dir.join(EntityKind::Yedek.file_name()).exists()
}

/// Create the data directory and seed header-only backing files.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let data_dir = config.data_path();

    if is_initialized(data_dir) {
        return Err(CliError::AlreadyInitialized(data_dir.display().to_string()));
    }

    for kind in [EntityKind::Spindle, EntityKind::Yedek] {
        let store = RecordStore::open(data_dir, kind)?;
        println!("created {}", store.path().display());
    }

    Ok(())
}

/// Boot the stores and run the HTTP server until shutdown.
///
/// Missing backing files are seeded on boot, so `serve` works on a fresh
/// data directory without a prior `init`.
pub fn serve(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    init_tracing();

    let mut http_config = config.http.clone();
    if let Some(port) = port_override {
        http_config.port = port;
    }

    let data_dir: PathBuf = config.data_path().to_path_buf();
    let assets = AssetState::open(&data_dir)?;
    let verifier = Arc::new(StaticCredentials::new(
        config.credentials.username.clone(),
        config.credentials.password.clone(),
    ));

    let server = HttpServer::new(
        http_config,
        assets,
        verifier,
        data_dir,
        PathBuf::from(&config.public_dir),
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Print the combined export document to stdout.
pub fn export(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let data_dir = config.data_path();

    let spindle_rows = RecordStore::open(data_dir, EntityKind::Spindle)?.list_all()?;
    let yedek_rows = RecordStore::open(data_dir, EntityKind::Yedek)?.list_all()?;

    println!(
        "{}",
        export_aggregator::aggregate(&spindle_rows, &yedek_rows)
    );

    Ok(())
}

/// Install the tracing subscriber; RUST_LOG overrides the `info` default.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
