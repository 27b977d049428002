use clap::Parser;
use protform::{encode_text, encode_tokens, run_with_threads, ResidueTrace, DEFAULT_CUTOFF};
use std::path::PathBuf;
use tracing::{debug, error, info, trace};

/// Output form of the encoding.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub(crate) enum OutputForm {
    /// Readable form-language text
    Text,
    /// Whitespace-separated integer tokens
    Tokens,
}

impl std::fmt::Display for OutputForm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputForm::Text => write!(f, "text"),
            OutputForm::Tokens => write!(f, "tokens"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the structure file to be encoded
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Name of the output file
    #[arg(short = 'f', long = "filename", default_value_t = String::from("form"))]
    filename: String,

    /// Output form of the encoding
    #[arg(short = 't', long, default_value_t = OutputForm::Text)]
    output_form: OutputForm,

    /// Distance cutoff for residue pairs to be in contact
    #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
    dist_cutoff: f64,

    /// Number of threads to use for parallel processing
    #[arg(short = 'j', long = "num-threads", default_value_t = 1)]
    num_threads: usize,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    let Some(content) = super::read_input(&args.input) else {
        return;
    };
    let trace = match ResidueTrace::from_text(&content) {
        Ok(trace) => trace,
        Err(e) => {
            error!("Failed to parse {}: {}", args.input.display(), e);
            return;
        }
    };
    debug!("Trace holds {} residues", trace.len());

    let (rendition, extension) = run_with_threads(args.num_threads, || match args.output_form {
        OutputForm::Text => (encode_text(&trace, args.dist_cutoff), "txt"),
        OutputForm::Tokens => {
            let tokens = encode_tokens(&trace, args.dist_cutoff)
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            (tokens, "tokens")
        }
    });

    let Some(output_file) = super::resolve_output(&args.output, &args.filename, extension) else {
        return;
    };
    if let Err(e) = std::fs::write(&output_file, rendition) {
        error!("Failed to write {}: {}", output_file.display(), e);
        return;
    }
    info!("Results saved to {}", output_file.display());
}
