use thiserror::Error;

/// Errors produced while parsing traces, building windows, or translating
/// the form language.
///
/// All failures are deterministic given the same inputs and are reported
/// synchronously to the caller; no operation returns a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtformError {
    /// A qualifying atom record carried a residue name outside the alphabet.
    #[error("unrecognized residue name '{name}' on line {line}")]
    UnrecognizedResidue {
        /// Three-letter residue name as it appeared in the record.
        name: String,
        /// 1-based source line number.
        line: usize,
    },

    /// A fixed-width field of a qualifying record failed to parse.
    #[error("malformed {field} field on line {line}: '{value}'")]
    MalformedField {
        /// Which field was being sliced.
        field: &'static str,
        /// The offending text, already trimmed.
        value: String,
        /// 1-based source line number.
        line: usize,
    },

    /// The decoder met an integer that is neither a residue token nor a
    /// control token.
    #[error("token {0} is neither a residue token nor a control token")]
    UnknownToken(u32),

    /// A requested window does not fit inside the trace.
    #[error("window of length {len} starting at {start} exceeds trace length {trace_len}")]
    InvalidWindow {
        /// Requested start offset.
        start: usize,
        /// Requested window length.
        len: usize,
        /// Length of the trace the window was requested on.
        trace_len: usize,
    },

    /// A target residue position lies outside the trace.
    #[error("target position {pos} is out of range for trace length {trace_len}")]
    InvalidPosition {
        /// Requested position.
        pos: usize,
        /// Length of the trace.
        trace_len: usize,
    },

    /// A token stream ended while the decoder was still awaiting the raw
    /// number announced by a `NEXT_NUMBER` control token.
    #[error("token stream ended while awaiting a number")]
    TruncatedStream,
}
