use clap::Parser;
use protform::decode_tokens;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to a file of whitespace-separated integer tokens
    #[arg(short, long)]
    input: PathBuf,
}

pub(crate) fn run(args: &Args) {
    let Some(content) = super::read_input(&args.input) else {
        return;
    };

    let mut tokens = Vec::new();
    for word in content.split_whitespace() {
        match word.parse::<u32>() {
            Ok(token) => tokens.push(token),
            Err(_) => {
                error!("'{}' is not an integer token", word);
                return;
            }
        }
    }

    match decode_tokens(&tokens) {
        Ok(text) => println!("{text}"),
        Err(e) => error!("Failed to decode {}: {}", args.input.display(), e),
    }
}
