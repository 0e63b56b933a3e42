use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_CELL_W: usize = 2;
pub const MAX_CELL_W: usize = 4;

/// Interactive size bounds offered to players.
pub const MIN_WIDTH: usize = 10;
pub const MAX_WIDTH: usize = 150;
pub const MIN_HEIGHT: usize = 10;
pub const MAX_HEIGHT: usize = 50;

/// Longest maze name accepted at the prompt, extension excluded.
pub const MAX_NAME_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub ascii: bool,
    pub cell_w: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            ascii: false,
            cell_w: DEFAULT_CELL_W,
        }
    }
}

/// Reads `FOGMAZE_SEED`, `FOGMAZE_ASCII` and `FOGMAZE_CELL_W`; values that
/// do not parse fall back to the defaults.
pub fn read_settings() -> Settings {
    settings_from(|key| std::env::var(key).ok())
}

pub fn settings_from(lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let seed = lookup("FOGMAZE_SEED").and_then(|v| v.trim().parse::<u64>().ok());
    let ascii = lookup("FOGMAZE_ASCII")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    let cell_w = lookup("FOGMAZE_CELL_W")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| (1..=MAX_CELL_W).contains(v))
        .unwrap_or(DEFAULT_CELL_W);
    Settings {
        seed,
        ascii,
        cell_w,
    }
}

/// Seed for a run: the configured one, else the clock.
pub fn run_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(settings_from(env(&[])), Settings::default());
    }

    #[test]
    fn parses_values() {
        let s = settings_from(env(&[
            ("FOGMAZE_SEED", " 42 "),
            ("FOGMAZE_ASCII", "Yes"),
            ("FOGMAZE_CELL_W", "1"),
        ]));
        assert_eq!(s.seed, Some(42));
        assert!(s.ascii);
        assert_eq!(s.cell_w, 1);
    }

    #[test]
    fn bad_values_fall_back() {
        let s = settings_from(env(&[
            ("FOGMAZE_SEED", "soon"),
            ("FOGMAZE_ASCII", "maybe"),
            ("FOGMAZE_CELL_W", "9"),
        ]));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn configured_seed_wins() {
        assert_eq!(run_seed(Some(7)), 7);
    }
}
