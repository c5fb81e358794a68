//! # CLI Layer
//!
//! This module is one possible UI client for internity. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the logging subscriber
//! - Decides exit codes (via the `Result` handed back to `main`)
//!
//! ## Modes
//!
//! - **One-shot**: `internity list sort/asc` runs a single line command and exits.
//! - **Session**: with no command words, a banner and greeting are printed and
//!   lines are read from stdin until `exit` or end of input. Errors inside a
//!   session are printed and the loop carries on.
//!
//! Startup failures (a data file that cannot be read or has a broken header)
//! are returned to `main` and end the process with exit code 1. Starting empty
//! instead would let the next save overwrite the damaged file.
//!
//! ## Structure
//!
//! - `run()`: entry point called by `main.rs`
//! - `init_context()`: resolves config and data paths, builds the API, loads the list
//! - `execute()`: parses one line and dispatches it to the API
//! - `print_*()` (in `print.rs`): output

use super::parser::{parse_line, Command};
use super::print::{
    print_error, print_goodbye, print_help, print_load_warnings, print_prompt, print_result,
    print_welcome,
};
use super::setup::Cli;
use clap::Parser;
use directories::ProjectDirs;
use internity::api::InternityApi;
use internity::config::InternityConfig;
use internity::error::Result;
use internity::store::fs::FileStorage;
use internity::store::Storage;
use std::io::{self, BufRead};
use tracing::{debug, info, warn};

struct AppContext {
    api: InternityApi<FileStorage>,
    show_banner: bool,
}

/// What the caller should do after a line has been handled.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    if cli.line.is_empty() {
        run_session(&mut ctx)
    } else {
        run_once(&mut ctx, &cli.line.join(" "))
    }
}

/// Installs the stderr subscriber. `RUST_LOG` is honoured unless `--verbose` asks for debug.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (tests); that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dirs = ProjectDirs::from("com", "internity", "internity");

    let config_dir = cli
        .config_dir
        .clone()
        .or_else(|| dirs.as_ref().map(|d| d.config_dir().to_path_buf()));
    let config = match &config_dir {
        Some(dir) => InternityConfig::load(dir).unwrap_or_else(|err| {
            warn!(error = %err, dir = %dir.display(), "ignoring unreadable config");
            InternityConfig::default()
        }),
        None => InternityConfig::default(),
    };

    let data_file = config.resolve_data_file(
        cli.data_file.as_deref(),
        dirs.as_ref().map(|d| d.data_dir()),
    );
    info!(path = %data_file.display(), "using data file");

    let mut api = InternityApi::new(FileStorage::new(data_file));
    let loaded = api.load()?;
    print_load_warnings(&loaded);

    Ok(AppContext {
        api,
        show_banner: config.show_banner,
    })
}

fn run_once(ctx: &mut AppContext, line: &str) -> Result<()> {
    if execute(&mut ctx.api, line)? == Flow::Exit {
        print_goodbye();
    }
    Ok(())
}

fn run_session(ctx: &mut AppContext) -> Result<()> {
    print_welcome(ctx.show_banner, ctx.api.username());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_prompt();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => {
                print_error("Invalid character detected: input is not valid text");
                continue;
            }
            Some(Err(err)) => return Err(err.into()),
            None => {
                debug!("end of input");
                // Keep the goodbye off the prompt line.
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match execute(&mut ctx.api, &line) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => print_error(&err.to_string()),
        }
    }

    print_goodbye();
    Ok(())
}

fn execute<S: Storage>(api: &mut InternityApi<S>, line: &str) -> Result<Flow> {
    let command = parse_line(line)?;
    debug!(?command, "executing");

    let result = match command {
        Command::Add(internship) => api.add(internship)?,
        Command::Delete(index) => api.delete(index)?,
        Command::List(order) => api.list(order)?,
        Command::Find(keyword) => api.find(&keyword)?,
        Command::Update { index, update } => api.update(index, &update)?,
        Command::Username(name) => api.set_username(&name)?,
        Command::Dashboard => api.dashboard()?,
        Command::Help => {
            print_help();
            return Ok(Flow::Continue);
        }
        Command::Exit => return Ok(Flow::Exit),
    };

    print_result(&result);
    Ok(Flow::Continue)
}
