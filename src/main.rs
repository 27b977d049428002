mod cli;

use clap::{Parser, Subcommand};
use tracing::Level;

/// Convert protein backbone structures into form-language encodings and
/// model-ready inputs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chain-A sequence and token IDs of structure files
    Seq(cli::seq::Args),
    /// Encode a structure into the protein form language
    Encode(cli::encode::Args),
    /// Restore readable text from a form-language token stream
    Decode(cli::decode::Args),
    /// Write a complete or windowed distance matrix as CSV
    Matrix(cli::matrix::Args),
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match &cli.command {
        Command::Seq(args) => cli::seq::run(args),
        Command::Encode(args) => cli::encode::run(args),
        Command::Decode(args) => cli::decode::run(args),
        Command::Matrix(args) => cli::matrix::run(args),
    }
}
