//! check-anagrams — Interactive anagram checker.
//! Reads two lines at a time from stdin and prints whether they are anagrams.

mod app;
mod args;

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use anagram_core::config::{Config, CONFIG_FILENAME};

use app::App;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WELCOME_MESSAGE: &str = include_str!("../res/welcome-message.txt");
const ABOUT: &str = include_str!("../res/about.txt");

/// Log to the configured file, or stderr since stdout carries the dialogue.
fn init_tracing(config: &Config) {
    let mut file_error = None;
    let writer = match config.log_path() {
        Some(path) => match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
            Err(e) => {
                file_error = Some((path, e));
                BoxMakeWriter::new(std::io::stderr)
            }
        },
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.to_ascii_lowercase().into()),
        )
        .with_ansi(config.log_file.is_none() && std::io::stderr().is_terminal())
        .with_writer(writer)
        .try_init();

    if let Some((path, e)) = file_error {
        warn!("Could not open log file {}: {}", path.display(), e);
    }
}

fn load_config(project_root: &std::path::Path) -> (Config, Option<anyhow::Error>) {
    if !project_root.join(CONFIG_FILENAME).is_file() {
        return (Config::from_env(), None);
    }
    match Config::load_from_dir(project_root) {
        Ok(config) => (config, None),
        Err(e) => (Config::from_env(), Some(e)),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, config_error) = load_config(&project_root);

    init_tracing(&config);
    if let Some(e) = config_error {
        warn!("Ignoring config, using defaults: {:#}", e);
    }
    for warning in &config.env_warnings {
        warn!("{}", warning);
    }

    if config.show_banner {
        println!("check-anagrams v{VERSION}");
        println!("{}", WELCOME_MESSAGE.trim_end());
    }

    if args::wants_license(std::env::args().skip(1)) {
        print!("{ABOUT}");
        let _ = std::io::stdout().flush();
        return ExitCode::SUCCESS;
    }

    info!("Starting interactive session");

    let mut app = App::new(&config);
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();

    match app.run(&mut reader, &mut writer).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(checks = app.checks, "{}", e);
            ExitCode::FAILURE
        }
    }
}
