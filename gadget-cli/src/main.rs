//! entrypoint for gadget-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use gadget::error::BoxError;
use tracing::level_filters::LevelFilter;

pub mod cmd;
use self::cmd::{parse, shorten};

pub mod trace;
pub mod utils;

#[cfg(target_family = "unix")]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[cfg(target_os = "windows")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "gadget")]
#[command(bin_name = "gadget")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, short = 'v', global = true)]
    /// log debug information to stderr
    ///
    /// (RUST_LOG takes precedence)
    verbose: bool,

    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Parse(parse::CliCommandParse),
    Shorten(shorten::CliCommandShorten),
    Unshorten(shorten::CliCommandUnshorten),
}

fn main() {
    let cli = Cli::parse();

    #[expect(clippy::exit)]
    if let Err(err) = run(cli) {
        eprintln!("exit with error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxError> {
    trace::init_tracing(if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    })?;

    match cli.cmds {
        CliCommands::Parse(cfg) => parse::run(&cfg),
        CliCommands::Shorten(cfg) => shorten::run_shorten(&cfg),
        CliCommands::Unshorten(cfg) => shorten::run_unshorten(&cfg),
    }
}
