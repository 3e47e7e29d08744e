//! Verification of contract artifacts against a `checksums.txt` file, as
//! produced by the contract optimizer: one `<sha256-hex> <file-name>` pair
//! per line.
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("Could not read checksum file {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Checksum for {0} not found.")]
    NotFound(String),
    #[error("Checksum mismatch for {file}: expected {expected}, got {actual}.")]
    Mismatch {
        file:     String,
        expected: String,
        actual:   String,
    },
}

/// Find the checksum of `target` in the contents of a checksum file.
pub fn find_checksum<'a>(contents: &'a str, target: &str) -> Option<&'a str> {
    contents.lines().find_map(|line| {
        let mut parts = line.split_whitespace();
        let checksum = parts.next()?;
        (parts.next()? == target).then_some(checksum)
    })
}

/// Read the checksum of `target` from the file at `path`.
pub async fn read_checksum(path: &Path, target: &str) -> Result<String, ChecksumError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ChecksumError::Io {
            path: path.to_owned(),
            source,
        })?;
    find_checksum(&contents, target)
        .map(str::to_owned)
        .ok_or_else(|| ChecksumError::NotFound(target.to_owned()))
}

/// Hex encoded SHA-256 of a wasm module.
pub fn wasm_checksum(wasm: &[u8]) -> String { hex::encode(Sha256::digest(wasm)) }

pub fn verify_artifact(file: &str, wasm: &[u8], expected: &str) -> Result<(), ChecksumError> {
    let actual = wasm_checksum(wasm);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(ChecksumError::Mismatch {
            file: file.to_owned(),
            expected: expected.to_owned(),
            actual,
        })
    }
}
