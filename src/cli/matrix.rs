use clap::Parser;
use nalgebra::DMatrix;
use protform::{complete_matrix, run_with_threads, window_matrix, ResidueTrace, DEFAULT_CUTOFF};
use std::path::PathBuf;
use tracing::{debug, error, info, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the structure file to be analyzed
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Name of the output file
    #[arg(short = 'f', long = "filename", default_value_t = String::from("matrix"))]
    filename: String,

    /// Distance cutoff for the complete matrix; ignored for windowed requests
    #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
    dist_cutoff: f64,

    /// Window length; when set, a raw windowed matrix is computed instead
    /// of the complete cutoff matrix
    #[arg(short = 'l', long)]
    window_len: Option<usize>,

    /// Start offset of the window
    #[arg(short, long, default_value_t = 0, requires = "window_len")]
    start: usize,

    /// Number of threads to use for parallel processing
    #[arg(short = 'j', long = "num-threads", default_value_t = 1)]
    num_threads: usize,
}

fn matrix_to_csv(matrix: &DMatrix<f64>) -> String {
    let mut csv = String::new();
    for i in 0..matrix.nrows() {
        let row = matrix
            .row(i)
            .iter()
            .map(|d| format!("{d:.3}"))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&row);
        csv.push('\n');
    }
    csv
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

    let matrix = match args.window_len {
        Some(len) => match window_matrix(&trace, len, args.start) {
            Ok(matrix) => matrix,
            Err(e) => {
                error!("{}", e);
                return;
            }
        },
        None => run_with_threads(args.num_threads, || {
            complete_matrix(&trace, args.dist_cutoff)
        }),
    };

    let Some(output_file) = super::resolve_output(&args.output, &args.filename, "csv") else {
        return;
    };
    if let Err(e) = std::fs::write(&output_file, matrix_to_csv(&matrix)) {
        error!("Failed to write {}: {}", output_file.display(), e);
        return;
    }
    info!("Results saved to {}", output_file.display());
}
