// alignment.rs - Multiple sequence alignment as a column-major grid

use crate::error::{PipelineError, Result};
use bio::io::fasta;
use std::collections::HashSet;
use std::path::Path;

/// Gap symbol used by aligners
pub const GAP: u8 = b'-';

/// A single named sequence from the alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

/// Rectangular alignment stored column by column.
///
/// `columns[j][r]` is the symbol of record `r` at alignment site `j`; record
/// order inside every column matches `names`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    names: Vec<String>,
    columns: Vec<Vec<u8>>,
}

/// Build the column-major grid from row-major records.
///
/// Fails when there are no records, when names repeat, or when any record's
/// length differs from the first record's.
pub fn transpose(records: &[SequenceRecord]) -> Result<AlignmentMatrix> {
    let first = records.first().ok_or_else(|| PipelineError::MalformedAlignment {
        reason: "alignment contains no records".to_string(),
    })?;
    let expected = first.sequence.len();

    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.name.as_str()) {
            return Err(PipelineError::MalformedAlignment {
                reason: format!("duplicate record name '{}'", record.name),
            });
        }
        if record.sequence.len() != expected {
            return Err(PipelineError::MalformedAlignment {
                reason: format!(
                    "record '{}' has length {}, expected {} (length of '{}')",
                    record.name,
                    record.sequence.len(),
                    expected,
                    first.name
                ),
            });
        }
    }

    let columns = (0..expected)
        .map(|j| records.iter().map(|r| r.sequence[j]).collect())
        .collect();

    Ok(AlignmentMatrix {
        names: records.iter().map(|r| r.name.clone()).collect(),
        columns,
    })
}

/// Record id: the header up to the first whitespace
pub fn record_id(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

impl AlignmentMatrix {
    /// Parse FASTA text into a matrix.
    ///
    /// Record names are the header text after `>`, verbatim apart from
    /// trailing whitespace.
    pub fn parse(text: &str) -> Result<Self> {
        // The FASTA reader requires the first line to be a header
        let text = text.trim_start();
        let reader = fasta::Reader::new(text.as_bytes());
        let headers: Vec<&str> = text
            .lines()
            .filter_map(|line| line.trim_end().strip_prefix('>'))
            .collect();

        let mut records = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| PipelineError::MalformedAlignment {
                reason: format!("invalid FASTA record #{}: {}", index + 1, e),
            })?;
            let name = match (headers.get(index), record.desc()) {
                (Some(header), _) => header.to_string(),
                (None, Some(desc)) => format!("{} {}", record.id(), desc),
                (None, None) => record.id().to_string(),
            };
            records.push(SequenceRecord::new(name, record.seq().to_vec()));
        }

        transpose(&records)
    }

    /// Read and parse a FASTA alignment file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        let matrix = Self::parse(&text)?;
        log::info!(
            "🧬 Alignment loaded: {} records, {} columns ({})",
            matrix.record_count(),
            matrix.column_count(),
            path.display()
        );
        Ok(matrix)
    }

    pub fn record_count(&self) -> usize {
        self.names.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Record identities in original order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, index: usize) -> Option<&[u8]> {
        self.columns.get(index).map(|c| c.as_slice())
    }

    pub fn columns(&self) -> impl Iterator<Item = &[u8]> {
        self.columns.iter().map(|c| c.as_slice())
    }

    /// Index of a record by full header or by its id (first word of the
    /// header). A full-header match wins.
    pub fn record_index(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .or_else(|| self.names.iter().position(|n| record_id(n) == name))
    }

    /// Sequence of one record, rebuilt from every column in order
    pub fn record_sequence(&self, record: usize) -> Vec<u8> {
        self.columns.iter().map(|column| column[record]).collect()
    }

    /// Inverse transpose: back to one record per identity
    pub fn to_records(&self) -> Vec<SequenceRecord> {
        self.names
            .iter()
            .enumerate()
            .map(|(r, name)| SequenceRecord::new(name.clone(), self.record_sequence(r)))
            .collect()
    }

    /// New matrix holding only the given columns, in the given order
    pub fn select_columns(&self, indices: &[usize]) -> Self {
        Self {
            names: self.names.clone(),
            columns: indices.iter().map(|&j| self.columns[j].clone()).collect(),
        }
    }

    /// New matrix holding only the records accepted by `keep`; columns keep
    /// their positions.
    pub fn restrict_records<F>(&self, keep: F) -> Result<Self>
    where
        F: Fn(&str) -> bool,
    {
        let kept: Vec<usize> = (0..self.names.len())
            .filter(|&r| keep(self.names[r].as_str()))
            .collect();

        if kept.is_empty() {
            return Err(PipelineError::MalformedAlignment {
                reason: "record filters removed every record".to_string(),
            });
        }

        Ok(Self {
            names: kept.iter().map(|&r| self.names[r].clone()).collect(),
            columns: self
                .columns
                .iter()
                .map(|column| kept.iter().map(|&r| column[r]).collect())
                .collect(),
        })
    }

    /// Keep exactly the named records (original alignment order). Names match
    /// the full header or the record id; every name must exist.
    pub fn restrict_to_names(&self, names: &HashSet<String>) -> Result<Self> {
        let mut requested: Vec<&String> = names.iter().collect();
        requested.sort();
        for name in requested {
            if self.record_index(name).is_none() {
                return Err(PipelineError::MissingIdentity { name: name.clone() });
            }
        }
        self.restrict_records(|name| names.contains(name) || names.contains(record_id(name)))
    }

    /// Drop every column where the reference record holds a gap
    pub fn strip_reference_gaps(&self, reference: &str) -> Result<Self> {
        let r = self
            .record_index(reference)
            .ok_or_else(|| PipelineError::MissingIdentity {
                name: reference.to_string(),
            })?;

        let kept: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column[r] != GAP)
            .map(|(j, _)| j)
            .collect();

        log::info!(
            "✂️  Reference '{}': removed {} gap columns, {} remain",
            reference,
            self.column_count() - kept.len(),
            kept.len()
        );
        Ok(self.select_columns(&kept))
    }
}
