//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RewatchError, RewatchResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RewatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> RewatchResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RewatchError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let (table, key) = match path_str.rsplit_once('.') {
                Some((table, key)) => (table, key),
                None => ("", path_str.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(content, table, key),
                suggestion: suggest_key(table, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Line of `key = ...` inside `[table]` (top level when `table` is empty), or
/// of the `[table.key]` header when the unknown key is itself a table.
fn find_line_number(content: &str, table: &str, key: &str) -> Option<usize> {
    let full = if table.is_empty() {
        key.to_string()
    } else {
        format!("{table}.{key}")
    };

    let mut current = String::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = table_header(trimmed) {
            if header == full {
                return Some(i + 1);
            }
            current = header.to_string();
            continue;
        }

        if current == table && assigns_key(trimmed, key) {
            return Some(i + 1);
        }
    }
    None
}

fn table_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?;
    let end = inner.find(']')?;
    Some(inner[..end].trim_matches(|c| c == '[' || c == ']').trim())
}

fn assigns_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

/// Closest known field of `table`, never `unknown` itself
fn suggest_key(table: &str, unknown: &str) -> Option<String> {
    let candidates: &[&str] = match table {
        "" => &["toolchain", "build", "watch", "output"],
        "toolchain" => &["program", "build_args", "test_args", "verbose_test_args"],
        "build" => &["stderr_is_failure"],
        "watch" => &["extension", "with_tests"],
        "output" => &["color", "unicode"],
        _ => &[],
    };

    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates.iter().filter(|c| **c != unknown) {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
