use abacus::core::config::{self, CliOverrides};
use abacus::{batch, tui};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "abacus", about = "A four-function terminal calculator")]
struct Args {
    /// Press these keys without opening the UI, e.g. "12+3=" (C = AC, < = DEL)
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the final state as JSON (with --keys)
    #[arg(long, requires = "keys")]
    json: bool,

    /// Config file to use instead of ~/.abacus/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("abacus: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            log_level: args.log_level.clone(),
        },
    );

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Some(parent) = resolved.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Abacus starting up (log level {})", resolved.log_level);

    let result = match args.keys {
        Some(keys) => batch::run(
            &keys,
            resolved.thousands_separator,
            args.json,
            &mut std::io::stdout().lock(),
        )
        .map_err(|e| e.to_string()),
        None => tui::run(resolved).map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("abacus: {e}");
            ExitCode::FAILURE
        }
    }
}
