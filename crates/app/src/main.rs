use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use sense_core::Catalog;
use services::{AppServices, BootService, ProgressStore, ServicesConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://selfsense.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number(raw: String, flag: &'static str) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn config(&self) -> ServicesConfig {
        self.services.config()
    }

    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressStore> {
        self.services.progress()
    }

    fn boot(&self) -> BootService {
        self.services.boot()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    persist: bool,
    config: ServicesConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--threshold <n>] [--type-speed-ms <n>] [--no-persist]");
    eprintln!("  cargo run -p app -- status [--db <sqlite_url>] [--threshold <n>]");
    eprintln!("  cargo run -p app -- reset  [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --threshold 4");
    eprintln!("  --type-speed-ms 15");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SENSE_DB_URL, SENSE_UNLOCK_THRESHOLD, SENSE_TYPE_SPEED_MS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut config = ServicesConfig::default();
        let mut db_url = env("SENSE_DB_URL").map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        if let Some(raw) = env("SENSE_UNLOCK_THRESHOLD") {
            config.unlock_threshold = to_usize(parse_number(raw, "SENSE_UNLOCK_THRESHOLD")?);
        }
        if let Some(raw) = env("SENSE_TYPE_SPEED_MS") {
            config.reveal_speed = Duration::from_millis(parse_number(raw, "SENSE_TYPE_SPEED_MS")?);
        }
        let mut persist = true;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--threshold" => {
                    let value = require_value(args, "--threshold")?;
                    config.unlock_threshold = to_usize(parse_number(value, "--threshold")?);
                }
                "--type-speed-ms" => {
                    let value = require_value(args, "--type-speed-ms")?;
                    config.reveal_speed = Duration::from_millis(parse_number(value, "--type-speed-ms")?);
                }
                "--no-persist" => persist = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            persist,
            config,
        })
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt().with_env_filter(filter).with_target(false).init();
}

async fn open_services(parsed: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    if !parsed.persist {
        info!("persistence disabled, progress lives for this run only");
        return Ok(AppServices::in_memory(parsed.config)?);
    }
    prepare_sqlite_file(&parsed.db_url)?;
    Ok(AppServices::new_sqlite(&parsed.db_url, parsed.config).await?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging();
    let services = open_services(&parsed).await?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Self of Sense")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            let progress = services.progress();
            let state = progress.current_state().await;
            let catalog = services.catalog();
            for section in catalog.sections() {
                let mark = if state.has_visited(&section.path) { "x" } else { " " };
                println!("[{mark}] {} {}", section.kanji, section.path);
            }
            let counter = progress
                .stored_counter()
                .await
                .map_or_else(|| "-".to_string(), |n| n.to_string());
            println!(
                "visited {}/{} (stored counter: {counter})",
                state.visit_count(),
                progress.policy().threshold()
            );
            println!(
                "reflection: {}",
                if state.unlocked() { "unlocked" } else { "locked" }
            );
            Ok(())
        }
        Command::Reset => {
            services.progress().reset().await?;
            println!("progress cleared ({})", parsed.db_url);
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
