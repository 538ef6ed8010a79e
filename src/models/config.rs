//! Pacer configuration
//!
//! Step timing is expressed in milliseconds. The completion callback is not
//! part of this struct because it cannot be serialized; it is handed to the
//! session separately.

use serde::{Deserialize, Serialize};

use crate::errors::{PacerError, PacerResult};

/// Amount by which one speed change moves the step delay
pub const SPEED_STEP_MS: u32 = 50;

pub const DEFAULT_DELAY_MS: u32 = 300;
pub const DEFAULT_MIN_DELAY_MS: u32 = 50;
pub const DEFAULT_MAX_DELAY_MS: u32 = 2000;

/// Timing configuration, supplied once at construction
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PacerConfig {
    /// Initial interval between steps
    pub delay: u32,

    /// Fastest allowed interval
    pub min_delay: u32,

    /// Slowest allowed interval
    pub max_delay: u32,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY_MS,
            min_delay: DEFAULT_MIN_DELAY_MS,
            max_delay: DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl PacerConfig {
    /// Parse a configuration from a JSON object; missing keys take defaults
    pub fn from_json(json: &str) -> PacerResult<Self> {
        let config: PacerConfig = serde_json::from_str(json)
            .map_err(|e| PacerError::InvalidConfig(e.to_string()))?;
        config.validate()
    }

    /// Reject bounds that leave no legal delay, or a delay outside them
    pub fn validate(self) -> PacerResult<Self> {
        if self.min_delay == 0 {
            return Err(PacerError::InvalidConfig(
                "minDelay must be at least 1ms".to_string(),
            ));
        }

        if self.min_delay > self.max_delay {
            return Err(PacerError::InvalidConfig(format!(
                "minDelay {} exceeds maxDelay {}",
                self.min_delay, self.max_delay
            )));
        }

        if !(self.min_delay..=self.max_delay).contains(&self.delay) {
            return Err(PacerError::InvalidConfig(format!(
                "delay {} outside [{}, {}]",
                self.delay, self.min_delay, self.max_delay
            )));
        }

        Ok(self)
    }

    /// One step faster, never below `min_delay`
    pub fn faster(&self, delay: u32) -> u32 {
        delay.saturating_sub(SPEED_STEP_MS).max(self.min_delay)
    }

    /// One step slower, never above `max_delay`
    pub fn slower(&self, delay: u32) -> u32 {
        delay.saturating_add(SPEED_STEP_MS).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PacerConfig::default();
        assert_eq!(config.delay, 300);
        assert_eq!(config.min_delay, 50);
        assert_eq!(config.max_delay, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_keys() {
        let config = PacerConfig::from_json(r#"{"delay": 500}"#).unwrap();
        assert_eq!(config.delay, 500);
        assert_eq!(config.min_delay, DEFAULT_MIN_DELAY_MS);
        assert_eq!(config.max_delay, DEFAULT_MAX_DELAY_MS);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = PacerConfig::from_json("{delay: fast}");
        assert!(matches!(result, Err(PacerError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = PacerConfig { delay: 100, min_delay: 500, max_delay: 100 };
        assert!(matches!(config.validate(), Err(PacerError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_delay_out_of_range() {
        let config = PacerConfig { delay: 10, ..PacerConfig::default() };
        assert!(config.validate().is_err());

        let config = PacerConfig { delay: 2001, ..PacerConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_min_delay() {
        let config = PacerConfig { delay: 0, min_delay: 0, max_delay: 10 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_faster_and_slower_clamp() {
        let config = PacerConfig::default();
        assert_eq!(config.faster(300), 250);
        assert_eq!(config.faster(70), 50);
        assert_eq!(config.slower(1980), 2000);
        assert_eq!(config.slower(300), 350);
    }
}
