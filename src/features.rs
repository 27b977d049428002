//! Assembly of model-ready input and output containers.
//!
//! These builders turn a parsed trace into the numeric vectors an external
//! pipeline consumes: plain token sequences, windowed inputs with
//! direction-value flanks, and per-target contact summaries. Every builder
//! borrows the trace read-only and allocates its own output.

use crate::distance;
use crate::error::ProtformError;
use crate::trace::ResidueTrace;
use crate::window;
use nalgebra::{DMatrix, DVector};

/// Per-residue token IDs as a numeric vector.
pub fn token_vector(trace: &ResidueTrace) -> DVector<f64> {
    DVector::from_iterator(trace.len(), trace.iter().map(|r| f64::from(r.token)))
}

/// 1-D windowed input: the direction value of everything left of the
/// window, the token IDs of the window itself, and the direction value of
/// everything right of it. Length is always `core_len + 2`.
///
/// # Errors
///
/// [`ProtformError::InvalidWindow`] when `start + core_len` exceeds the
/// trace length.
pub fn windowed_input(
    trace: &ResidueTrace,
    core_len: usize,
    start: usize,
) -> Result<DVector<f64>, ProtformError> {
    let end = start
        .checked_add(core_len)
        .filter(|&end| end <= trace.len())
        .ok_or(ProtformError::InvalidWindow {
            start,
            len: core_len,
            trace_len: trace.len(),
        })?;
    let records = trace.records();
    let left = window::direction_value(&records[..start]);
    let right = window::direction_value(&records[end..]);
    let mut values = Vec::with_capacity(core_len + 2);
    values.push(left);
    values.extend(records[start..end].iter().map(|r| f64::from(r.token)));
    values.push(right);
    Ok(DVector::from_vec(values))
}

/// Square tiling of the 1-D windowed input: every row of the returned
/// `(core_len + 2)`-sized matrix is the vector from [`windowed_input`].
///
/// # Errors
///
/// Same failure modes as [`windowed_input`].
pub fn windowed_input_2d(
    trace: &ResidueTrace,
    core_len: usize,
    start: usize,
) -> Result<DMatrix<f64>, ProtformError> {
    let input = windowed_input(trace, core_len, start)?;
    let n = input.len();
    Ok(DMatrix::from_fn(n, n, |_, j| input[j]))
}

/// Target-residue input: the target position followed by the token ID of
/// every residue in the trace.
///
/// # Errors
///
/// [`ProtformError::InvalidPosition`] when `pos` is not a valid trace
/// position.
pub fn target_input(trace: &ResidueTrace, pos: usize) -> Result<DVector<f64>, ProtformError> {
    if pos >= trace.len() {
        return Err(ProtformError::InvalidPosition {
            pos,
            trace_len: trace.len(),
        });
    }
    let mut values = Vec::with_capacity(trace.len() + 1);
    values.push(pos as f64);
    values.extend(trace.iter().map(|r| f64::from(r.token)));
    Ok(DVector::from_vec(values))
}

/// Target-residue contact summary, the supervised counterpart of
/// [`target_input`].
///
/// Walks the target's row of the complete cutoff matrix and emits, for
/// every entry that survives rounding, the partner's 1-based position, the
/// rounded distance, and a `0` separator. Partners whose distance rounds
/// to zero are dropped along with everything beyond the cutoff.
///
/// # Errors
///
/// [`ProtformError::InvalidPosition`] when `pos` is not a valid trace
/// position.
pub fn target_contacts(
    trace: &ResidueTrace,
    pos: usize,
    cutoff: f64,
) -> Result<Vec<u32>, ProtformError> {
    if pos >= trace.len() {
        return Err(ProtformError::InvalidPosition {
            pos,
            trace_len: trace.len(),
        });
    }
    let anchor = &trace.records()[pos];
    let mut sentence = Vec::new();
    for (j, other) in trace.iter().enumerate() {
        let d = distance::distance(anchor, other);
        if d > cutoff {
            continue;
        }
        let rounded = d.round() as u32;
        if rounded != 0 {
            sentence.extend_from_slice(&[j as u32 + 1, rounded, 0]);
        }
    }
    Ok(sentence)
}
