// CSV input and output for batch comparisons

use std::io::Write;
use std::path::Path;
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::matcher::{DocumentPair, PairOutcome};

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    first: &'a Path,
    second: &'a Path,
    similarity: Option<String>,
    band: Option<&'static str>,
    error: Option<String>,
}

/// Reads `first,second` rows. Relative paths resolve against the CSV's directory.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentPair>> {
    let path = path.as_ref();
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::file_access(path, io),
            other => Error::config(format!("Unreadable pair list {:?}: {:?}", path, other)),
        })?;

    let mut pairs = Vec::new();
    for row in reader.deserialize() {
        let pair: DocumentPair = row?;
        pairs.push(DocumentPair::new(
            base_dir.join(&pair.first),
            base_dir.join(&pair.second),
        ));
    }

    debug!("Loaded {} pairs from {:?}", pairs.len(), path);
    Ok(pairs)
}

pub fn write_outcomes<W: Write>(writer: W, outcomes: &[PairOutcome], precision: usize) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let (similarity, band, error) = match &outcome.result {
            Ok(comparison) => (
                Some(format!("{:.*}", precision, comparison.percentage())),
                Some(comparison.band().label()),
                None,
            ),
            Err(e) => (None, None, Some(e.to_string())),
        };
        writer.serialize(ResultRow {
            first: &outcome.pair.first,
            second: &outcome.pair.second,
            similarity,
            band,
            error,
        })?;
    }

    writer.flush()?;
    Ok(())
}
