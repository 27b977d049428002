//! Pairwise spatial distances over a residue trace.
//!
//! All computations are Euclidean, symmetric, and deterministic; matrices
//! are rebuilt on demand and never cached. The trace itself is read-only,
//! so the complete matrix is assembled row-parallel with rayon.

use crate::error::ProtformError;
use crate::trace::{ResidueRecord, ResidueTrace};
use nalgebra::DMatrix;
use rayon::prelude::*;

/// Default contact cutoff distance, in the distance units of the source
/// coordinates (Ångströms for structure files).
pub const DEFAULT_CUTOFF: f64 = 20.0;

/// Residues at most this far apart in sequence never count as contacts;
/// backbone adjacency would otherwise dominate every encoding.
pub const SEQUENCE_EXCLUSION: usize = 4;

/// Euclidean distance between two CA records.
pub fn distance(a: &ResidueRecord, b: &ResidueRecord) -> f64 {
    (a.pos - b.pos).norm()
}

/// Raw L×L distance matrix over trace positions `start..start + len`.
///
/// Entry `(i, j)` is the distance between global positions `start + i` and
/// `start + j`; no cutoff is applied.
///
/// # Errors
///
/// [`ProtformError::InvalidWindow`] when the window does not fit inside
/// the trace.
pub fn window_matrix(
    trace: &ResidueTrace,
    len: usize,
    start: usize,
) -> Result<DMatrix<f64>, ProtformError> {
    let end = start
        .checked_add(len)
        .filter(|&end| end <= trace.len())
        .ok_or(ProtformError::InvalidWindow {
            start,
            len,
            trace_len: trace.len(),
        })?;
    let window = &trace.records()[start..end];
    Ok(DMatrix::from_fn(len, len, |i, j| {
        distance(&window[i], &window[j])
    }))
}

/// Complete N×N distance matrix with entries beyond `cutoff` zeroed.
///
/// The diagonal is zero by construction. Increasing the cutoff only ever
/// adds nonzero entries.
pub fn complete_matrix(trace: &ResidueTrace, cutoff: f64) -> DMatrix<f64> {
    let n = trace.len();
    let rows: Vec<Vec<f64>> = trace
        .records()
        .par_iter()
        .map(|a| {
            trace
                .records()
                .iter()
                .map(|b| {
                    let d = distance(a, b);
                    if d <= cutoff {
                        d
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect();
    DMatrix::from_row_iterator(n, n, rows.into_iter().flatten())
}

/// Contact partners of the residue at `anchor`: every position `j` whose
/// distance to the anchor is within `cutoff` and whose sequence separation
/// exceeds [`SEQUENCE_EXCLUSION`].
///
/// Partners are returned in trace order with their raw distances.
///
/// # Panics
///
/// Panics if `anchor` is not a valid trace position.
pub fn contact_partners(trace: &ResidueTrace, anchor: usize, cutoff: f64) -> Vec<(usize, f64)> {
    let a = &trace.records()[anchor];
    trace
        .records()
        .iter()
        .enumerate()
        .filter(|(j, _)| anchor.abs_diff(*j) > SEQUENCE_EXCLUSION)
        .map(|(j, b)| (j, distance(a, b)))
        .filter(|(_, d)| *d <= cutoff)
        .collect()
}
