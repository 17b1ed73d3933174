//! Writes a result set, either as lines to a stream or to the next free
//! numbered `outputN.txt` file in a directory.
use anyhow::{Context, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::canonical::CanonicalSet;

/// Writes each token of `set` followed by a newline, then flushes `out`.
pub fn write_lines(set: &CanonicalSet, mut out: impl io::Write) -> Result<()> {
    for token in set {
        out.write_all(token.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Saves `set` to `next_output_path(dir)`, one token per line with no newline
/// after the last, and returns the path written.
pub fn save_numbered(set: &CanonicalSet, dir: &Path) -> Result<PathBuf> {
    let path = next_output_path(dir)?;
    let text = set.iter().map(|t| t.as_bytes()).collect::<Vec<_>>().join(&b'\n');
    fs::write(&path, text).with_context(|| format!("Can't write file: {}", path.display()))?;
    log::info!("wrote {} tokens to {}", set.len(), path.display());
    Ok(path)
}

/// Returns `dir/outputN.txt`, where `N` is one more than the largest number
/// already used by an `outputN.txt` file in `dir`, or 1 if there is none.
pub fn next_output_path(dir: &Path) -> Result<PathBuf> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Can't read directory: {}", dir.display()))?;
    let mut last = 0_u64;
    for entry in entries {
        let entry = entry.with_context(|| format!("Can't read directory: {}", dir.display()))?;
        if let Some(n) = entry.file_name().to_str().and_then(output_number) {
            last = last.max(n);
        }
    }
    Ok(dir.join(format!("output{}.txt", last + 1)))
}

fn output_number(name: &str) -> Option<u64> {
    let digits = name.strip_prefix("output")?.strip_suffix(".txt")?;
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}
