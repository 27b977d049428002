//! Direction values: scalar summaries of residue sub-sequences.
//!
//! A direction value collapses an arbitrary stretch of the trace into one
//! number so that fixed-shape windowed inputs can carry their flanking
//! context. The summary is position-sensitive and one-way; there is no
//! decoder for it.

use crate::trace::ResidueRecord;

/// The logistic function 1 / (1 + e^(−x)).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Direction value of a residue sub-sequence.
///
/// Every distinct token accumulates a power equal to the sum of the
/// 0-based positions at which it occurs within the slice. The result is
/// the product, over distinct tokens in first-occurrence order, of
/// `sigmoid(token ^ sigmoid(power))`. An empty slice yields the empty
/// product, 1.0.
pub fn direction_value(records: &[ResidueRecord]) -> f64 {
    let mut powers: Vec<(u32, f64)> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        match powers.iter_mut().find(|(token, _)| *token == rec.token) {
            Some((_, power)) => *power += i as f64,
            None => powers.push((rec.token, i as f64)),
        }
    }
    powers
        .iter()
        .map(|&(token, power)| sigmoid(f64::from(token).powf(sigmoid(power))))
        .product()
}
