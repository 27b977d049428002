use clap::Parser;
use protform::ResidueTrace;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Structure files to summarize
    input: Vec<PathBuf>,
}

pub(crate) fn run(args: &Args) {
    for f in &args.input {
        let Some(content) = super::read_input(f) else {
            continue;
        };

        let trace = match ResidueTrace::from_text(&content) {
            Ok(trace) => trace,
            Err(e) => {
                error!("Failed to parse {}: {}", f.display(), e);
                continue;
            }
        };

        println!("File: {}", f.display());
        println!("A: {}", trace.codes());
        println!(
            "tokens: {}",
            trace
                .tokens()
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        println!();
    }
}
