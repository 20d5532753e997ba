use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};

use crate::card::CardRenderer;
use crate::record::{CardRecord, RawRecord};

/// Stream records out of CSV text with a header row, in file order.
///
/// Columns are looked up by name; extra columns are ignored. Errors carry the
/// 1-based data row number.
pub fn records<R: Read>(reader: R) -> impl Iterator<Item = Result<CardRecord>> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Fields)
        .from_reader(reader)
        .into_deserialize::<RawRecord>()
        .enumerate()
        .map(|(idx, row)| {
            let raw = row.with_context(|| format!("malformed CSV at data row {}", idx + 1))?;
            CardRecord::new(&raw).with_context(|| format!("invalid data row {}", idx + 1))
        })
}

/// Parse every record up front, stopping at the first bad row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CardRecord>> {
    records(reader).collect()
}

/// Render one card per CSV row into `out_dir`, strictly in file order.
///
/// Each row is written before the next is parsed. The first failure aborts
/// the batch; cards already written stay on disk.
pub fn process_csv(renderer: &CardRenderer, path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut written: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    for record in records(file) {
        let record = record.with_context(|| format!("failed to parse {}", path.display()))?;
        let target = renderer.render(&record, out_dir)?;
        if !seen.insert(target.clone()) {
            log::warn!(
                "{} was already written by an earlier row and has been overwritten",
                target.display()
            );
        }
        written.push(target);
    }
    log::info!(
        "rendered {} record(s) from {}",
        written.len(),
        path.display()
    );
    Ok(written)
}
