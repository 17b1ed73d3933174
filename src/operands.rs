//! Provides the `read_pair` function, which returns the contents of both
//! operand files. Each operand is read into memory in its entirety, since the
//! tokens of its vocabulary borrow from it.
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Returns the contents of the two files in `files`, with UTF-16 files
/// translated to UTF-8.
pub fn read_pair(files: &[impl AsRef<Path>; 2]) -> Result<(Vec<u8>, Vec<u8>)> {
    let [first, second] = files;
    Ok((read_operand(first.as_ref())?, read_operand(second.as_ref())?))
}

fn read_operand(path: &Path) -> Result<Vec<u8>> {
    let contents = fs::read(path).with_context(|| format!("Can't read file: {}", path.display()))?;
    log::debug!("read {} bytes from {}", contents.len(), path.display());
    Ok(decode_if_utf16(contents))
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // The BOM itself comes through as a UTF-8 BOM, which the tokenizer skips
    // like any other non-ASCII bytes. Malformed sequences become U+FFFD.
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    candidate
}
