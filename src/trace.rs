//! Alpha-carbon trace extraction from fixed-width structure records.
//!
//! The parser consumes raw text lines in the atomic-coordinate record
//! layout: one [`ResidueRecord`] is produced per `ATOM` line on chain A
//! whose stripped atom name is `CA` and whose residue is not water. Record
//! order follows line order, and the resulting [`ResidueTrace`] is
//! immutable, so downstream computations can borrow it concurrently.

use crate::alphabet;
use crate::error::ProtformError;
use nalgebra::Point3;
use std::str::FromStr;
use tracing::debug;

/// The only chain the trace is read from.
const TARGET_CHAIN: &str = "A";

/// One alpha-carbon observation on the target chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    /// Token ID of the residue code.
    pub token: u32,
    /// One-letter residue code.
    pub code: char,
    /// Atom serial number from the source record.
    pub serial: usize,
    /// Residue sequence number from the source record.
    pub seq_num: isize,
    /// Alpha-carbon position.
    pub pos: Point3<f64>,
}

impl ResidueRecord {
    /// Build a record from a one-letter code and coordinates, or `None`
    /// when the code is outside the alphabet.
    pub fn new(code: char, serial: usize, seq_num: isize, pos: Point3<f64>) -> Option<Self> {
        let token = alphabet::token_of(code)?;
        Some(Self {
            token,
            code,
            serial,
            seq_num,
            pos,
        })
    }
}

/// The ordered alpha-carbon trace of chain A.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidueTrace {
    records: Vec<ResidueRecord>,
}

/// Slice a fixed-width column range out of a line, trimming surrounding
/// whitespace. Ranges beyond the end of the line yield an empty field.
fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Parse a fixed-width numeric field, reporting the column meaning and
/// source line on failure.
fn parse_field<T: FromStr>(
    line: &str,
    start: usize,
    end: usize,
    field: &'static str,
    line_num: usize,
) -> Result<T, ProtformError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse().map_err(|_| ProtformError::MalformedField {
        field,
        value: raw.to_string(),
        line: line_num,
    })
}

impl ResidueTrace {
    /// Extract the chain-A CA trace from raw structure-file lines.
    ///
    /// A line contributes a record iff its record type (columns 0–3) is
    /// `ATOM`, its chain identifier (column 21) is `A`, its residue name
    /// (columns 17–19) is not water, and its atom name (columns 12–15,
    /// interior spaces stripped) is `CA`. Lines failing any predicate are
    /// silently skipped.
    ///
    /// # Errors
    ///
    /// [`ProtformError::UnrecognizedResidue`] when a qualifying line names
    /// a residue outside the alphabet — skipping it silently would shift
    /// every later sequence position, so parsing aborts instead.
    /// [`ProtformError::MalformedField`] when a numeric column of a
    /// qualifying line fails to parse.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ProtformError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line_num = idx + 1;
            if line.get(0..4) != Some("ATOM") {
                continue;
            }
            if slice_and_trim(line, 21, 22) != TARGET_CHAIN {
                continue;
            }
            let res_name = line.get(17..20).unwrap_or("");
            let atom_name = line.get(12..16).unwrap_or("").replace(' ', "");
            if res_name == "HOH" || atom_name != "CA" {
                continue;
            }
            let code = alphabet::code_of_three_letter(res_name).ok_or_else(|| {
                ProtformError::UnrecognizedResidue {
                    name: res_name.to_string(),
                    line: line_num,
                }
            })?;
            let token = alphabet::token_of(code).expect("three-letter table maps into the alphabet");
            let serial = parse_field(line, 6, 11, "serial", line_num)?;
            let seq_num = parse_field(line, 22, 26, "residue number", line_num)?;
            let x = parse_field(line, 30, 38, "x", line_num)?;
            let y = parse_field(line, 38, 46, "y", line_num)?;
            let z = parse_field(line, 47, 54, "z", line_num)?;
            records.push(ResidueRecord {
                token,
                code,
                serial,
                seq_num,
                pos: Point3::new(x, y, z),
            });
        }
        debug!("Extracted {} CA records from chain A", records.len());
        Ok(Self { records })
    }

    /// Extract the trace from the full text of a structure file.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ResidueTrace::from_lines`].
    pub fn from_text(content: &str) -> Result<Self, ProtformError> {
        Self::from_lines(content.lines())
    }

    /// Build a trace directly from records, bypassing line parsing.
    pub fn from_records(records: Vec<ResidueRecord>) -> Self {
        Self { records }
    }

    /// Number of residues in the trace.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the trace holds no residues.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in file order.
    pub fn records(&self) -> &[ResidueRecord] {
        &self.records
    }

    /// Iterate the records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResidueRecord> {
        self.records.iter()
    }

    /// One-letter sequence of the trace.
    pub fn codes(&self) -> String {
        self.records.iter().map(|r| r.code).collect()
    }

    /// Token IDs of the trace, in sequence order.
    pub fn tokens(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.token).collect()
    }
}

impl<'a> IntoIterator for &'a ResidueTrace {
    type Item = &'a ResidueRecord;
    type IntoIter = std::slice::Iter<'a, ResidueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom_line(
        serial: usize,
        atom: &str,
        resn: &str,
        chain: char,
        seq: isize,
        x: f64,
        y: f64,
        z: f64,
    ) -> String {
        format!(
            "ATOM  {serial:>5} {atom:^4} {resn} {chain}{seq:>4}    {x:8.3}{y:8.3}{z:8.3}  1.00 20.00           C"
        )
    }

    #[test]
    fn parses_the_documented_example_line() {
        let line = "ATOM      1  CA  ALA A   1      11.104  13.207   2.064  1.00 20.00           C";
        let trace = ResidueTrace::from_lines([line]).unwrap();
        assert_eq!(trace.len(), 1);
        let rec = &trace.records()[0];
        assert_eq!(rec.code, 'A');
        assert_eq!(rec.token, 3);
        assert_eq!(rec.serial, 1);
        assert_eq!(rec.seq_num, 1);
        assert_eq!(rec.pos, Point3::new(11.104, 13.207, 2.064));
    }

    #[test]
    fn skips_records_off_the_target_chain() {
        let lines = [
            atom_line(1, "CA", "ALA", 'A', 1, 1.0, 2.0, 3.0),
            atom_line(2, "CA", "GLY", 'B', 2, 4.0, 5.0, 6.0),
        ];
        let trace = ResidueTrace::from_lines(lines.iter().map(String::as_str)).unwrap();
        assert_eq!(trace.codes(), "A");
    }

    #[test]
    fn skips_water_and_non_ca_atoms() {
        let lines = [
            atom_line(1, "N", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            atom_line(2, "CA", "ALA", 'A', 1, 1.0, 1.0, 1.0),
            atom_line(3, "O", "HOH", 'A', 2, 9.0, 9.0, 9.0),
            "HETATM    4  CA  ALA A   3       1.000   1.000   1.000  1.00 20.00           C"
                .to_string(),
            "REMARK not an atom record".to_string(),
        ];
        let trace = ResidueTrace::from_lines(lines.iter().map(String::as_str)).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.records()[0].serial, 2);
    }

    #[test]
    fn preserves_file_order() {
        let lines = [
            atom_line(10, "CA", "MET", 'A', 5, 0.0, 0.0, 0.0),
            atom_line(11, "CA", "GLN", 'A', 6, 0.0, 0.0, 1.0),
            atom_line(12, "CA", "ILE", 'A', 7, 0.0, 0.0, 2.0),
        ];
        let trace = ResidueTrace::from_lines(lines.iter().map(String::as_str)).unwrap();
        assert_eq!(trace.codes(), "MQI");
        assert_eq!(trace.tokens(), vec![59, 29, 43]);
        assert_eq!(
            trace.iter().map(|r| r.seq_num).collect::<Vec<_>>(),
            vec![5, 6, 7]
        );
    }

    #[test]
    fn unknown_residue_name_aborts_parsing() {
        let lines = [
            atom_line(1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            atom_line(2, "CA", "XXX", 'A', 2, 0.0, 0.0, 1.0),
        ];
        let err = ResidueTrace::from_lines(lines.iter().map(String::as_str)).unwrap_err();
        assert_eq!(
            err,
            ProtformError::UnrecognizedResidue {
                name: "XXX".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn malformed_coordinate_is_reported_with_context() {
        let mut line = atom_line(1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0);
        line.replace_range(30..38, "  1.0e.1");
        let err = ResidueTrace::from_lines([line.as_str()]).unwrap_err();
        assert!(matches!(
            err,
            ProtformError::MalformedField {
                field: "x",
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn from_text_splits_lines() {
        let content = format!(
            "{}\n{}\n",
            atom_line(1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            atom_line(2, "CA", "GLY", 'A', 2, 0.0, 0.0, 1.0)
        );
        let trace = ResidueTrace::from_text(&content).unwrap();
        assert_eq!(trace.codes(), "AG");
    }
}
