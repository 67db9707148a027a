use anyhow::Context as _;
use clap::Parser;
use liblox::repl::{self, Mode};
use std::{fs, io, path::PathBuf, process};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lox", version, about = "Evaluate Lox expressions")]
struct Cli {
    /// Source file holding a single expression.
    #[arg(conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Expression to evaluate.
    #[arg(short, long)]
    eval: Option<String>,

    /// Print the reverse Polish rendering instead of evaluating.
    #[arg(long, default_value_t = false)]
    rpn: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = if cli.rpn { Mode::Rpn } else { Mode::Evaluate };

    let source = match (cli.eval, cli.file) {
        (Some(expr), _) => expr,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => {
            println!("Hello! This is the Lox expression evaluator!");
            println!("Feel free to type in expressions");
            return repl::start(mode).context("repl failed");
        }
    };

    if let Err(error) = repl::run_line(source.trim_end(), mode, &mut io::stdout()) {
        eprintln!("{}", error);
        process::exit(error.exit_code());
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}
