//! Trampoline - lesson runner CLI
use std::path::PathBuf;
use std::process;
use std::thread;

use clap::{Parser, Subcommand};
use tracing::Level;

use trampoline_eval::programs::{
    countdown, countdown_recursive, factorial, is_even, sum_recursive, sum_to,
};
use trampoline_eval::{EvalConfig, Trampoline};

/// Stack given to the naive recursive references, so whether they overflow
/// does not depend on the shell's stack limit.
const RECURSION_STACK: usize = 8 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "trampoline", version, about = "Run recursive lesson programs on a trampoline")]
struct Cli {
    /// Runner configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log progress and print step counts
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count down from N, printing each number, then "Done!"
    Countdown {
        n: u64,
        /// Use naive recursion on an 8 MiB stack (overflows for large N)
        #[arg(long)]
        recursive: bool,
    },
    /// Sum the integers 1..=N
    Sum {
        n: u64,
        /// Use naive recursion on an 8 MiB stack (overflows for large N)
        #[arg(long)]
        recursive: bool,
    },
    /// Decide whether N is even through mutual recursion
    Parity { n: u64 },
    /// Compute N! with overflow checking
    Factorial { n: u64 },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<EvalConfig, String> {
    let config = match path {
        Some(path) => EvalConfig::load_from_path(path).map_err(|e| e.to_string())?,
        None => EvalConfig::default(),
    };
    Ok(config.with_env_overrides())
}

/// Run a naive recursive reference on a thread with a fixed-size stack.
/// Running out of that stack aborts the process.
fn on_recursion_stack<T, F>(f: F) -> Result<T, String>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::Builder::new()
        .name("recursive".to_string())
        .stack_size(RECURSION_STACK)
        .spawn(f)
        .map_err(|e| format!("Failed to spawn recursion thread: {}", e))?
        .join()
        .map_err(|_| "Recursion thread panicked".to_string())
}

fn report_steps(verbose: bool, steps: u64) {
    if verbose {
        eprintln!("steps: {}", steps);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let runner = Trampoline::new(load_config(cli.config.as_ref())?);

    match cli.command {
        Command::Countdown { n, recursive: true } => {
            let result = on_recursion_stack(move || {
                countdown_recursive(n, &mut |count| println!("{}", count))
            })?;
            println!("{}", result);
        }
        Command::Countdown { n, recursive: false } => {
            let landed = runner
                .run_infallible(countdown(n, |count| println!("{}", count)))
                .map_err(|e| e.to_string())?;
            println!("{}", landed.value);
            report_steps(cli.verbose, landed.steps);
        }
        Command::Sum { n, recursive: true } => {
            let sum = on_recursion_stack(move || sum_recursive(n))?.map_err(|e| e.to_string())?;
            println!("{}", sum);
        }
        Command::Sum { n, recursive: false } => {
            let landed = runner.run(sum_to(n)).map_err(|e| e.to_string())?;
            println!("{}", landed.value);
            report_steps(cli.verbose, landed.steps);
        }
        Command::Parity { n } => {
            let landed = runner.run_infallible(is_even(n)).map_err(|e| e.to_string())?;
            println!("{}", if landed.value { "even" } else { "odd" });
            report_steps(cli.verbose, landed.steps);
        }
        Command::Factorial { n } => {
            let landed = runner.run(factorial(n)).map_err(|e| e.to_string())?;
            println!("{}", landed.value);
            report_steps(cli.verbose, landed.steps);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
