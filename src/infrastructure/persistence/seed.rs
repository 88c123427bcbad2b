//! Loading initial repository contents from a JSON file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::entities::User;

#[derive(Debug, Deserialize)]
struct SeedUser {
    id: i64,
    name: String,
    age: i64,
}

/// Reads a JSON array of `{id, name, age}` records.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid array of
/// users, or contains the same id twice.
pub fn load_seed_file(path: &Path) -> Result<Vec<User>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let records: Vec<SeedUser> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id) {
            anyhow::bail!("Duplicate user id {} in seed file", record.id);
        }
    }

    Ok(records
        .into_iter()
        .map(|r| User::new(r.id, r.name, r.age))
        .collect())
}
