// encode.rs - Tabular and FASTA encodings of an alignment matrix

use crate::data::{AlignmentMatrix, ScoreSeries};
use crate::error::{PipelineError, Result};
use crate::output::TableFormat;
use bio::io::fasta;

/// Header label of the trailing score column
pub const SCORE_LABEL: &str = "phyloP";

/// Render a score the way it reads in the score file: shortest round-trip
/// form, with `.0` kept on integral values.
pub fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Every column must still hold one symbol per record
fn check_columns(matrix: &AlignmentMatrix) -> Result<()> {
    let expected = matrix.record_count();
    for (j, column) in matrix.columns().enumerate() {
        if column.len() != expected {
            return Err(PipelineError::InconsistentRow {
                column: j + 1,
                found: column.len(),
                expected,
            });
        }
    }
    Ok(())
}

/// One row per column: a symbol per record, then the score.
/// The header lists record identities followed by the score label.
pub fn encode_table(
    matrix: &AlignmentMatrix,
    scores: &ScoreSeries,
    format: TableFormat,
) -> Result<Vec<u8>> {
    if matrix.column_count() != scores.len() {
        return Err(PipelineError::ColumnCountMismatch {
            columns: matrix.column_count(),
            scores: scores.len(),
        });
    }
    check_columns(matrix)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header: Vec<&str> = matrix.names().iter().map(String::as_str).collect();
    header.push(SCORE_LABEL);
    writer
        .write_record(&header)
        .map_err(|e| PipelineError::Encode(format!("header: {}", e)))?;

    for (j, (column, score)) in matrix.columns().zip(scores.iter()).enumerate() {
        let mut row: Vec<Vec<u8>> = column.iter().map(|&symbol| vec![symbol]).collect();
        row.push(format_score(score).into_bytes());
        writer
            .write_record(&row)
            .map_err(|e| PipelineError::Encode(format!("column {}: {}", j + 1, e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| PipelineError::Encode(e.to_string()))
}

/// One FASTA record per identity, rebuilt from the matrix columns in order
pub fn encode_fasta(matrix: &AlignmentMatrix) -> Result<Vec<u8>> {
    check_columns(matrix)?;

    let mut buffer = Vec::new();
    {
        let mut writer = fasta::Writer::new(&mut buffer);
        for record in matrix.to_records() {
            writer
                .write(&record.name, None, &record.sequence)
                .map_err(|e| PipelineError::Encode(format!("record '{}': {}", record.name, e)))?;
        }
        writer
            .flush()
            .map_err(|e| PipelineError::Encode(e.to_string()))?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (AlignmentMatrix, ScoreSeries) {
        (
            AlignmentMatrix::parse(">A\nAC-G\n>B\nACTG\n").unwrap(),
            ScoreSeries::new(vec![2.0, 0.2, -2.0, 0.49]),
        )
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(2.0), "2.0");
        assert_eq!(format_score(-2.0), "-2.0");
        assert_eq!(format_score(0.2), "0.2");
        assert_eq!(format_score(0.49), "0.49");
        assert_eq!(format_score(-0.5), "-0.5");
    }

    #[test]
    fn test_encode_csv() {
        let (matrix, scores) = scenario();
        let table = encode_table(&matrix, &scores, TableFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(table).unwrap(),
            "A,B,phyloP\nA,A,2.0\nC,C,0.2\n-,T,-2.0\nG,G,0.49\n"
        );
    }

    #[test]
    fn test_encode_tsv() {
        let (matrix, scores) = scenario();
        let table = encode_table(&matrix, &scores, TableFormat::Tsv).unwrap();
        let text = String::from_utf8(table).unwrap();
        assert_eq!(text.lines().next(), Some("A\tB\tphyloP"));
        assert_eq!(text.lines().nth(3), Some("-\tT\t-2.0"));
    }

    #[test]
    fn test_encode_empty_table_has_header() {
        let (matrix, _) = scenario();
        let empty = matrix.select_columns(&[]);
        let table = encode_table(&empty, &ScoreSeries::default(), TableFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(table).unwrap(), "A,B,phyloP\n");
    }

    #[test]
    fn test_encode_table_rejects_mismatch() {
        let (matrix, _) = scenario();
        let scores = ScoreSeries::new(vec![1.0]);
        assert!(matches!(
            encode_table(&matrix, &scores, TableFormat::Csv),
            Err(PipelineError::ColumnCountMismatch { .. })
        ));
    }

    #[test]
    fn test_encode_fasta() {
        let (matrix, _) = scenario();
        let filtered = matrix.select_columns(&[1, 3]);
        let fasta = encode_fasta(&filtered).unwrap();
        assert_eq!(String::from_utf8(fasta).unwrap(), ">A\nCG\n>B\nCG\n");
    }

    #[test]
    fn test_fasta_reparses_to_same_matrix() {
        let matrix = AlignmentMatrix::parse(">human chr1\nATG-CA\n>mouse\nATGGCA\n").unwrap();
        let fasta = encode_fasta(&matrix).unwrap();
        let reparsed = AlignmentMatrix::parse(std::str::from_utf8(&fasta).unwrap()).unwrap();
        assert_eq!(reparsed, matrix);
    }
}
