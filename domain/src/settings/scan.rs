//! Line scanner for the capacity setting

use crate::capacity::ResolvedCapacity;
use crate::core::error::ResolveFailure;

/// Find `key` in settings text and parse its integer value.
///
/// The first line whose trimmed content starts with `key` wins. The match is
/// a case-sensitive prefix match, so later duplicates are ignored. The value
/// is everything after the first `=`, trimmed, parsed as a base-10 `i32`.
/// No range check is applied to the parsed value.
pub fn scan_capacity_setting(text: &str, key: &str) -> Result<ResolvedCapacity, ResolveFailure> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let line = text
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(key))
        .ok_or_else(|| ResolveFailure::KeyMissing {
            key: key.to_string(),
        })?;

    let (_, raw) = line.split_once('=').ok_or_else(|| ResolveFailure::ParseFailure {
        raw: line.to_string(),
    })?;

    let raw = raw.trim();
    raw.parse::<i32>()
        .map(ResolvedCapacity::new)
        .map_err(|_| ResolveFailure::ParseFailure {
            raw: raw.to_string(),
        })
}
