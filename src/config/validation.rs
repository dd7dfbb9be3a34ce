//! Config validation: unknown-key detection with edit-distance suggestions.
//!
//! Two-pass parse: first read the raw TOML into `toml::Value`, walk the key
//! tree, compare against known field names, and emit warnings with "did you
//! mean?" suggestions. Then proceed with normal serde deserialization.
//! Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, unknown section).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

/// Maximum edit distance for a suggestion to be offered.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Returns the complete set of valid dotted key paths for `AppConfig`.
///
/// Any new field added to `AppConfig` must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        // [server]
        "server",
        "server.addr",
        "server.cors_origins",
        "server.max_body_bytes",
        // [jitter]
        "jitter",
        "jitter.seed",
    ]
    .into_iter()
    .collect()
}

/// Walk a TOML value and return every dotted key path (tables and leaves).
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

/// Closest known key within [`MAX_SUGGESTION_DISTANCE`] edits, if any.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (strsim::levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= MAX_SUGGESTION_DISTANCE)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, k)| k.to_string())
}

/// Report every key in `raw_toml` that `AppConfig` does not know.
///
/// Unparseable TOML yields no warnings; serde reports the parse error later.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}
