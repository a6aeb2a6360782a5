//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::policies::ConflictScope;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{HotelierError, HotelierResult};

use super::types::{Config, OutputFormat, Verbosity};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "hotelier.toml";

const KNOWN_KEYS: &[&str] = &["booking", "conflict_scope", "output", "format", "verbosity"];
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HotelierResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HotelierError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, the working directory, the user config
/// directory, or defaults, then apply environment overrides.
///
/// An explicit path must exist. The other locations are skipped when absent.
pub fn load_or_default(explicit: Option<&Path>) -> HotelierResult<(Config, Vec<ConfigWarning>)> {
    let file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(PathBuf::from(PROJECT_CONFIG_FILE)), user_config_file()]
            .into_iter()
            .flatten()
            .find(|path| path.is_file()),
    };

    let (config, warnings) = match file {
        Some(path) => {
            tracing::debug!(file = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (HOTELIER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`, so callers can supply their own
/// environment.
///
/// Unrecognized values are logged and leave the setting unchanged.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("HOTELIER_CONFLICT_SCOPE") {
        match ConflictScope::parse(&value) {
            Some(scope) => config.booking.conflict_scope = scope,
            None => warn_invalid("HOTELIER_CONFLICT_SCOPE", &value, &["global", "same-room"]),
        }
    }

    if let Some(value) = lookup("HOTELIER_VERBOSITY") {
        match Verbosity::parse(&value) {
            Some(verbosity) => config.output.verbosity = verbosity,
            None => warn_invalid(
                "HOTELIER_VERBOSITY",
                &value,
                &["quiet", "normal", "verbose", "debug"],
            ),
        }
    }

    if let Some(value) = lookup("HOTELIER_OUTPUT") {
        match OutputFormat::parse(&value) {
            Some(format) => config.output.format = format,
            None => warn_invalid("HOTELIER_OUTPUT", &value, &["text", "json"]),
        }
    }

    config
}

fn warn_invalid(var: &str, value: &str, valid: &[&str]) {
    let suggestion = closest(value, valid).unwrap_or("");
    tracing::warn!(
        var,
        value,
        suggestion,
        valid = %valid.join(", "),
        "ignoring invalid environment value"
    );
}

/// User config file (`$XDG_CONFIG_HOME/hotelier/config.toml` or the
/// platform equivalent)
fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hotelier").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    closest(unknown, KNOWN_KEYS).map(str::to_string)
}

fn closest<'a>(unknown: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let unknown = unknown.to_ascii_lowercase();
    // Ties keep the earlier candidate.
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(&unknown, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= MAX_SUGGESTION_DISTANCE)
        .map(|(candidate, _)| candidate)
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
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
