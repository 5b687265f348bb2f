use clap::{ArgAction, CommandFactory, Parser};
use codemeld::cache::{CacheStore, RandomIdGenerator, MAX_CACHE_FILES};
use codemeld::clipboard::SystemClipboard;
use codemeld::errors::CodemeldError;
use codemeld::logger::initialize_logger;
use codemeld::reporting::print_summary;
use codemeld::{meld_files, Request};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Formats code files into an LLM-friendly block and copies it to the clipboard",
    long_about = None,
    disable_version_flag = true
)]
struct CliArgs {
    /// Files or directories, separated by spaces or newlines, e.g. -f "/path/to/dir file3.txt"
    #[arg(short = 'f', long, default_value = "")]
    files: String,

    /// Extensions to include, e.g. -r ".go .py"; empty includes everything
    #[arg(short = 'r', long, default_value = "")]
    reg: String,

    /// Extensions to ignore, e.g. -i ".log .tmp"; wins over --reg
    #[arg(short = 'i', long, visible_alias = "ir", default_value = "")]
    ireg: String,

    /// Also collect files under dot-prefixed directories
    #[arg(long, visible_alias = "ih")]
    include_hidden: bool,

    /// Directory holding the rotated cache files (defaults to ~/.cache/codemeld)
    #[arg(long, env = "CODEMELD_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Exit code used when there is nothing to meld
    #[arg(long, env = "CODEMELD_EMPTY_EXIT_CODE", default_value_t = 0)]
    empty_exit_code: u8,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    version: Option<bool>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger();

    let request = Request::from_inputs(
        &cli_args.files,
        &cli_args.reg,
        &cli_args.ireg,
        cli_args.include_hidden,
    );
    if request.is_empty() {
        if let Err(e) = CliArgs::command().print_help() {
            error!("Failed to print help: {}", e);
        }
        return ExitCode::from(cli_args.empty_exit_code);
    }

    let store = match &cli_args.cache_dir {
        Some(dir) => CacheStore::new(dir, MAX_CACHE_FILES, Box::new(RandomIdGenerator)),
        None => match CacheStore::with_default_dir() {
            Ok(store) => store,
            Err(e) => {
                let fallback = std::env::temp_dir().join("codemeld");
                warn!("{}, caching under {}", e, fallback.display());
                CacheStore::new(fallback, MAX_CACHE_FILES, Box::new(RandomIdGenerator))
            }
        },
    };

    match meld_files(&request, &store, &SystemClipboard).await {
        Ok(outcome) => {
            print_summary(&outcome.output, &outcome.report);
            ExitCode::SUCCESS
        }
        Err(CodemeldError::NoMatchingFiles) => {
            println!("No matching files");
            ExitCode::from(cli_args.empty_exit_code)
        }
        Err(e) => {
            eprintln!("Error melding files: {}", e);
            ExitCode::FAILURE
        }
    }
}
