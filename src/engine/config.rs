use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies explored by fixed-depth minimax search.
    pub search_depth: u8,
    /// Cap on iterative deepening; in practice the time budget stops the
    /// loop long before this on a non-trivial board.
    pub max_depth: u8,
    /// Milliseconds of slack the deadline check keeps in reserve so the
    /// search can unwind and return before the timer reaches zero.
    pub timer_threshold_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            max_depth: 64,
            timer_threshold_ms: 10.0,
        }
    }
}

impl EngineConfig {
    /// Parses a config from JSON; absent fields keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let json = "{}";
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.max_depth, 64);
        assert!((config.timer_threshold_ms - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_config_partial() {
        let json = r#"{
            "search_depth": 5
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.search_depth, 5);
        // Others should be default
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_load_config_full() {
        let json = r#"{
            "search_depth": 4,
            "max_depth": 20,
            "timer_threshold_ms": 25.0
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.search_depth, 4);
        assert_eq!(config.max_depth, 20);
        assert!((config.timer_threshold_ms - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_config_invalid_json() {
        let json = "{ invalid json }";
        let result = EngineConfig::load_from_json(json);
        assert!(result.is_err());
    }
}
