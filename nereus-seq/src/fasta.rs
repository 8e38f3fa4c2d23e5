//! FASTA record loading.

use std::path::Path;

use needletail::parse_fastx_file;
use nereus_core::{NereusError, Result};

/// A sequence read from a FASTA file: free-text header plus raw symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Header line content (after `>`, whitespace-trimmed).
    pub description: String,
    /// Sequence symbols with line breaks removed.
    pub sequence: Vec<u8>,
}

impl nereus_core::Sequence for Record {
    fn as_bytes(&self) -> &[u8] {
        &self.sequence
    }
}

/// Read the first `n` records of a FASTA file.
///
/// # Errors
///
/// Returns [`NereusError::Parse`] if the file is malformed or contains fewer
/// than `n` records.
pub fn read_first_n(path: impl AsRef<Path>, n: usize) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let mut reader =
        parse_fastx_file(path).map_err(|e| NereusError::Parse(e.to_string()))?;

    let mut records = Vec::with_capacity(n);
    while records.len() < n {
        let Some(record) = reader.next() else {
            return Err(NereusError::Parse(format!(
                "{}: expected {} sequences, found {}",
                path.display(),
                n,
                records.len()
            )));
        };
        let record = record.map_err(|e| NereusError::Parse(e.to_string()))?;
        records.push(Record {
            description: String::from_utf8_lossy(record.id()).trim().to_string(),
            sequence: record.seq().into_owned(),
        });
    }

    Ok(records)
}

/// Load the query/target pair from one or two FASTA files.
///
/// A single path yields the first two records of that file; two paths yield
/// the first record of each.
///
/// # Errors
///
/// Returns [`NereusError::InvalidInput`] for any other number of paths, and
/// parse errors as in [`read_first_n`].
pub fn load_pair(paths: &[impl AsRef<Path>]) -> Result<(Record, Record)> {
    fn missing() -> NereusError {
        NereusError::Parse("missing sequence record".into())
    }

    match paths {
        [single] => {
            let mut records = read_first_n(single, 2)?;
            let target = records.pop().ok_or_else(missing)?;
            let query = records.pop().ok_or_else(missing)?;
            Ok((query, target))
        }
        [first, second] => {
            let query = read_first_n(first, 1)?.pop().ok_or_else(missing)?;
            let target = read_first_n(second, 1)?.pop().ok_or_else(missing)?;
            Ok((query, target))
        }
        _ => Err(NereusError::InvalidInput(
            "expected one or two sequence files".into(),
        )),
    }
}
