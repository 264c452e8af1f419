use std::path::Path;

use anyhow::Context as _;

use crate::formats::BookRecord;

pub fn write_records(path: &Path, records: &[BookRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records).context("serialize records")?;
    std::fs::write(path, json).with_context(|| format!("write records: {}", path.display()))?;
    Ok(())
}
