//! The protein form language.
//!
//! A deterministic, flat symbolic rendering of a trace's contact structure,
//! produced residue by residue in both readable text and integer-token
//! form, plus the inverse decoding of the token form back to text. Both
//! encodings always measure distances against the full trace, whatever the
//! requested output form.

use crate::alphabet;
use crate::distance;
use crate::error::ProtformError;
use crate::trace::ResidueTrace;

/// Control token: introduces a rounded contact distance.
pub const ON: u32 = 107;
/// Control token: introduces a partner position.
pub const TO: u32 = 109;
/// Control token: introduces the anchor residue.
pub const IS: u32 = 113;
/// Control token: closes a residue's contact list.
pub const DROP: u32 = 127;
/// Control token: separates residues.
pub const BREAKLINE: u32 = 131;
/// Control token: the next token is a raw number, not a symbol.
pub const NEXT_NUMBER: u32 = 137;

/// Readable text form of the language.
///
/// For each residue the encoder emits its code, one `to <j> is <code> on
/// <distance>` clause per contact partner (partners within `cutoff` and
/// more than [`distance::SEQUENCE_EXCLUSION`] positions away in sequence),
/// and a closing `drop`. The code inside each clause is the anchor's, not
/// the partner's; the deployed token vocabulary depends on this ordering.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use protform::{encode_text, ResidueRecord, ResidueTrace, DEFAULT_CUTOFF};
///
/// let trace = ResidueTrace::from_records(vec![
///     ResidueRecord::new('A', 1, 1, Point3::new(0.0, 0.0, 0.0)).unwrap(),
/// ]);
/// assert_eq!(encode_text(&trace, DEFAULT_CUTOFF), "A drop \n ");
/// ```
pub fn encode_text(trace: &ResidueTrace, cutoff: f64) -> String {
    let mut sentence = String::new();
    for (i, res) in trace.iter().enumerate() {
        sentence.push(res.code);
        sentence.push(' ');
        for (j, d) in distance::contact_partners(trace, i, cutoff) {
            sentence.push_str(&format!("to {j} is {} on {} ", res.code, d.round() as u32));
        }
        sentence.push_str("drop \n ");
    }
    sentence
}

/// Integer-token form of the language.
///
/// The stream mirrors [`encode_text`]: the anchor's token ID, then one
/// 8-token group `[TO, NEXT_NUMBER, j, IS, anchor, ON, NEXT_NUMBER,
/// distance]` per contact partner, then `[DROP, BREAKLINE]`. Raw numbers
/// (partner positions and rounded distances) are always announced by
/// [`NEXT_NUMBER`], which keeps them distinguishable from token IDs when
/// decoding.
pub fn encode_tokens(trace: &ResidueTrace, cutoff: f64) -> Vec<u32> {
    let mut tokens = Vec::new();
    for (i, res) in trace.iter().enumerate() {
        tokens.push(res.token);
        for (j, d) in distance::contact_partners(trace, i, cutoff) {
            tokens.extend_from_slice(&[
                TO,
                NEXT_NUMBER,
                j as u32,
                IS,
                res.token,
                ON,
                NEXT_NUMBER,
                d.round() as u32,
            ]);
        }
        tokens.extend_from_slice(&[DROP, BREAKLINE]);
    }
    tokens
}

/// Decoder state. `AwaitingNumber` is entered only by [`NEXT_NUMBER`] and
/// always exits after exactly one emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecoderState {
    Normal,
    AwaitingNumber,
}

/// Restore readable text from a token stream.
///
/// A single forward pass: raw numbers are emitted verbatim where a
/// preceding [`NEXT_NUMBER`] announced them, control tokens render as their
/// keywords, and anything else is looked up as a residue token.
///
/// # Errors
///
/// [`ProtformError::UnknownToken`] for an integer outside the alphabet and
/// control set; [`ProtformError::TruncatedStream`] when the stream ends
/// while a raw number is still owed.
pub fn decode_tokens(tokens: &[u32]) -> Result<String, ProtformError> {
    let mut text = String::new();
    let mut state = DecoderState::Normal;
    for &token in tokens {
        match state {
            DecoderState::AwaitingNumber => {
                text.push_str(&format!(" {token}"));
                state = DecoderState::Normal;
            }
            DecoderState::Normal => match token {
                ON => text.push_str(" on"),
                NEXT_NUMBER => state = DecoderState::AwaitingNumber,
                DROP => text.push_str(" drop"),
                IS => text.push_str(" is"),
                TO => text.push_str(" to"),
                BREAKLINE => text.push_str(" \n"),
                other => {
                    text.push(' ');
                    text.push(alphabet::code_of_token(other)?);
                }
            },
        }
    }
    if state == DecoderState::AwaitingNumber {
        return Err(ProtformError::TruncatedStream);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DEFAULT_CUTOFF;
    use crate::trace::ResidueRecord;
    use nalgebra::Point3;

    fn trace_of(positions: &[(char, f64, f64, f64)]) -> ResidueTrace {
        let records = positions
            .iter()
            .enumerate()
            .map(|(i, &(code, x, y, z))| {
                ResidueRecord::new(code, i + 1, i as isize + 1, Point3::new(x, y, z)).unwrap()
            })
            .collect();
        ResidueTrace::from_records(records)
    }

    /// Six residues spread so far apart that nothing is in contact.
    fn contact_free_trace() -> ResidueTrace {
        trace_of(&[
            ('M', 0.0, 0.0, 0.0),
            ('Q', 0.0, 0.0, 100.0),
            ('I', 0.0, 0.0, 200.0),
            ('F', 0.0, 0.0, 300.0),
            ('V', 0.0, 0.0, 400.0),
            ('K', 0.0, 0.0, 500.0),
        ])
    }

    /// Six residues on a line, one unit apart: positions 0 and 5 are the
    /// only pair both within the cutoff and outside the exclusion band.
    fn single_contact_trace() -> ResidueTrace {
        trace_of(&[
            ('A', 0.0, 0.0, 0.0),
            ('R', 0.0, 0.0, 1.0),
            ('N', 0.0, 0.0, 2.0),
            ('D', 0.0, 0.0, 3.0),
            ('C', 0.0, 0.0, 4.0),
            ('E', 0.0, 0.0, 5.0),
        ])
    }

    #[test]
    fn text_form_of_a_contact_free_trace() {
        let text = encode_text(&contact_free_trace(), DEFAULT_CUTOFF);
        assert_eq!(text, "M drop \n Q drop \n I drop \n F drop \n V drop \n K drop \n ");
    }

    #[test]
    fn text_form_emits_the_anchor_code_in_contact_clauses() {
        let text = encode_text(&single_contact_trace(), DEFAULT_CUTOFF);
        // The clause names the anchor's own code, not the partner's
        assert!(text.starts_with("A to 5 is A on 5 drop \n "));
        assert!(text.ends_with("E to 0 is E on 5 drop \n "));
    }

    #[test]
    fn token_form_groups_are_eight_wide() {
        let trace = single_contact_trace();
        let tokens = encode_tokens(&trace, DEFAULT_CUTOFF);
        // Anchor 0 ('A' = 3) contacts partner 5 at distance 5
        assert_eq!(
            &tokens[..11],
            &[3, TO, NEXT_NUMBER, 5, IS, 3, ON, NEXT_NUMBER, 5, DROP, BREAKLINE]
        );
        // Interior residues have no contacts: bare token plus terminators
        assert_eq!(&tokens[11..14], &[5, DROP, BREAKLINE]);
    }

    #[test]
    fn token_and_text_forms_agree_word_for_word() {
        let trace = single_contact_trace();
        let text = encode_text(&trace, DEFAULT_CUTOFF);
        let decoded = decode_tokens(&encode_tokens(&trace, DEFAULT_CUTOFF)).unwrap();
        assert_eq!(
            text.split_whitespace().collect::<Vec<_>>(),
            decoded.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn round_trip_restores_the_sequence() {
        let trace = contact_free_trace();
        let decoded = decode_tokens(&encode_tokens(&trace, DEFAULT_CUTOFF)).unwrap();
        let codes: String = decoded
            .split_whitespace()
            .filter(|w| *w != "drop")
            .collect();
        assert_eq!(codes, trace.codes());
    }

    #[test]
    fn decoder_renders_every_control_token() {
        let stream = [53, TO, NEXT_NUMBER, 9, IS, 53, ON, NEXT_NUMBER, 12, DROP, BREAKLINE];
        let text = decode_tokens(&stream).unwrap();
        assert_eq!(text, " K to 9 is K on 12 drop \n");
    }

    #[test]
    fn raw_numbers_shadow_token_values() {
        // 107 after NEXT_NUMBER is a plain number, not the ON keyword
        let text = decode_tokens(&[NEXT_NUMBER, 107]).unwrap();
        assert_eq!(text, " 107");
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(
            decode_tokens(&[3, 999]),
            Err(ProtformError::UnknownToken(999))
        );
    }

    #[test]
    fn stream_ending_mid_number_is_truncated() {
        assert_eq!(
            decode_tokens(&[3, TO, NEXT_NUMBER]),
            Err(ProtformError::TruncatedStream)
        );
        // An empty stream is fine
        assert_eq!(decode_tokens(&[]), Ok(String::new()));
    }
}
