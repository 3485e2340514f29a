use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use gopher_core::model::{OVERALL, ProgressSummary, TopicCatalog};
use services::{AppServices, Clock, NotesService, ProgressService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DATA_PATH: &str = "gopher-notes.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
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

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(value))
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<TopicCatalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn notes(&self) -> Arc<NotesService> {
        self.services.notes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    data_path: PathBuf,
    catalog_path: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            catalog_path: None,
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app ui       [--data <path>] [--catalog <path>]");
    eprintln!("  app progress [--data <path>] [--catalog <path>]");
    eprintln!("  app reset    [--data <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data {DEFAULT_DATA_PATH}");
    eprintln!("  --catalog <built-in Go catalog>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GOPHER_DATA_PATH, GOPHER_CATALOG_PATH, GOPHER_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }

    fn accepts_catalog(self) -> bool {
        !matches!(self, Self::Reset)
    }
}

impl Args {
    fn from_env() -> Self {
        let mut args = Self::default();
        if let Some(path) = non_empty_env("GOPHER_DATA_PATH") {
            args.data_path = PathBuf::from(path);
        }
        args.catalog_path = non_empty_env("GOPHER_CATALOG_PATH").map(PathBuf::from);
        args
    }

    fn apply_flags(
        mut self,
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => self.data_path = require_path(args, "--data")?,
                "--catalog" if cmd.accepts_catalog() => {
                    self.catalog_path = Some(require_path(args, "--catalog")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn init_logging() {
    let filter = std::env::var("GOPHER_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    // A second init (e.g. under a test runner) is harmless; keep the first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means launch the UI.
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
    let parsed = Args::from_env()
        .apply_flags(cmd, &mut iter)
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_logging();

    let services = AppServices::json_file(
        &parsed.data_path,
        parsed.catalog_path.as_deref(),
        Clock::system(),
    )?;

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window; turn it off explicitly.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Gopher Notes")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Progress => {
            let progress = services.progress();
            let categories = progress.all_category_progress();
            for summary in &categories {
                println!("{}", format_summary(summary));
            }
            println!("{}", format_summary(&ProgressSummary::overall(&categories)));
            Ok(())
        }
        Command::Reset => {
            services.progress().reset_progress()?;
            info!(data = %parsed.data_path.display(), "progress reset");
            println!("Progress reset.");
            Ok(())
        }
    }
}

fn format_summary(summary: &ProgressSummary) -> String {
    let label = if summary.category == OVERALL {
        "overall".to_string()
    } else {
        summary.category.replace('_', " ")
    };
    format!(
        "{label:<24} {:>3}/{:<3} {:>3}%",
        summary.completed, summary.total, summary.percentage
    )
}

fn main() {
    if let Err(err) = run() {
        // Binary glue: print once and exit non-zero.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
