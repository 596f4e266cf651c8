//! Keys command: show every property and where its value would come from.

use anyhow::Result;
use std::io::Write;
use underfs::PropertyKey;

use super::Session;

fn display_value(key: PropertyKey, value: Option<String>) -> String {
    match value {
        Some(_) if key.is_secret() => "******".to_string(),
        Some(v) => v,
        None => "-".to_string(),
    }
}

/// Run the keys command, reporting to `out`.
///
/// Read-only: overrides are shown but not merged into the store.
pub fn run_keys(session: &Session, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<24} {:<8} {:<36} {}", "PROPERTY", "STATE", "CONFIG", "OVERRIDE")?;
    for key in PropertyKey::ALL {
        let state = if session.conf.is_set(key) {
            "set"
        } else if session.conf.contains_key(key) {
            "null"
        } else {
            "unset"
        };
        writeln!(
            out,
            "{:<24} {:<8} {:<36} {}",
            key.name(),
            state,
            display_value(key, session.conf.get(key)),
            display_value(key, session.overrides.get(key.name())),
        )?;
    }
    Ok(())
}
