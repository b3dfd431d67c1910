extern crate ansi_term;
extern crate ctrlc;
use crate::lang::{Error, ErrorCode, Program};
use crate::mach::{Outcome, Runtime};
use crate::error;
use ansi_term::Style;
use clap::Parser;
use std::fs;
use std::io::{ErrorKind, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "deque", version)]
#[command(about = "Run a program written for the deque machine")]
struct Cli {
    /// Path to the program source
    path: Option<PathBuf>,

    /// Print every instruction with the deque before it runs
    #[arg(
        long,
        env = "DEQUE_TRACE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    trace: bool,
}

pub fn main() {
    init_logging();
    let cli = Cli::parse();
    let path = match cli.path {
        Some(path) => path,
        None => {
            eprintln!("ERROR: no file path is provided");
            process::exit(1);
        }
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C handler not installed: {}", e);
    }

    let code = match load(&path).and_then(|program| {
        let runtime = Runtime::new(program, cli.trace);
        main_loop(runtime, interrupted)
    }) {
        Ok(outcome) => {
            debug!(?outcome, "finished");
            0
        }
        Err(e) => {
            report(&e);
            match e.code() {
                ErrorCode::Interrupted => 130,
                _ => 1,
            }
        }
    };
    process::exit(code);
}

/// Use `RUST_LOG` to override the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main_loop(mut runtime: Runtime, interrupted: Arc<AtomicBool>) -> Result<Outcome, Error> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = runtime.run_polled(&mut out, || interrupted.swap(false, Ordering::SeqCst));
    let _ = out.flush();
    result
}

fn load(path: &Path) -> Result<Program, Error> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                _ => return Err(error!(IoError; &msg)),
            }
        }
    };
    debug!(path = %path.display(), bytes = source.len(), "source read");
    Program::from_source(&source)
}

fn report(e: &Error) {
    debug!(code = ?e.code(), address = ?e.address(), "run failed");
    let text = format!("ERROR: {}", e);
    if std::io::stderr().is_terminal() {
        eprintln!("{}", Style::new().bold().paint(text));
    } else {
        eprintln!("{}", text);
    }
}
