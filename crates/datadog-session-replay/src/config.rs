// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{
    BITMAP_SIZE_LIMIT_BYTES, DEBOUNCE_TIME_MS, IMAGE_SIZE_LIMIT_DP, MAX_DELAY_MS, MAX_QUEUE_SIZE,
    MAX_RECORD_DELAY_MS,
};
use crate::errors::ConfigError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration of the session replay recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReplayConfig {
    /// Age, in milliseconds, after which a queued item is discarded
    pub max_item_delay_ms: i64,
    /// Quiet period closing a burst of draw signals
    pub debounce: Duration,
    /// Longest time between two snapshots while draws keep coming
    pub max_record_delay: Duration,
    /// Number of items the recorded data queue holds before dropping new ones
    pub max_queue_size: usize,
    /// Largest view side, in dp, captured as an image
    pub image_size_limit_dp: i64,
    /// Largest encoded image payload, in bytes
    pub bitmap_size_limit_bytes: usize,
    /// Log level (e.g., trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SessionReplayConfig {
    fn default() -> Self {
        Self {
            max_item_delay_ms: MAX_DELAY_MS,
            debounce: Duration::from_millis(DEBOUNCE_TIME_MS),
            max_record_delay: Duration::from_millis(MAX_RECORD_DELAY_MS),
            max_queue_size: MAX_QUEUE_SIZE,
            image_size_limit_dp: IMAGE_SIZE_LIMIT_DP,
            bitmap_size_limit_bytes: BITMAP_SIZE_LIMIT_BYTES,
            log_level: "info".to_string(),
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}

impl SessionReplayConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_item_delay_ms = parse_env(
            "DD_SESSION_REPLAY_MAX_ITEM_DELAY_MS",
            defaults.max_item_delay_ms,
        );
        let debounce = Duration::from_millis(parse_env(
            "DD_SESSION_REPLAY_DEBOUNCE_MS",
            DEBOUNCE_TIME_MS,
        ));
        let max_record_delay = Duration::from_millis(parse_env(
            "DD_SESSION_REPLAY_MAX_RECORD_DELAY_MS",
            MAX_RECORD_DELAY_MS,
        ));
        let max_queue_size = parse_env(
            "DD_SESSION_REPLAY_MAX_QUEUE_SIZE",
            defaults.max_queue_size,
        );
        let image_size_limit_dp = parse_env(
            "DD_SESSION_REPLAY_IMAGE_SIZE_LIMIT_DP",
            defaults.image_size_limit_dp,
        );
        let bitmap_size_limit_bytes = parse_env(
            "DD_SESSION_REPLAY_BITMAP_SIZE_LIMIT_BYTES",
            defaults.bitmap_size_limit_bytes,
        );
        let log_level = env::var("DD_LOG_LEVEL")
            .map(|val| val.to_lowercase())
            .unwrap_or(defaults.log_level);

        let config = Self {
            max_item_delay_ms,
            debounce,
            max_record_delay,
            max_queue_size,
            image_size_limit_dp,
            bitmap_size_limit_bytes,
            log_level,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_item_delay_ms <= 0 {
            return Err(ConfigError::Invalid(
                "Max item delay must be greater than 0".to_string(),
            ));
        }

        if self.debounce.is_zero() || self.max_record_delay.is_zero() {
            return Err(ConfigError::Invalid(
                "Debounce delays must be greater than 0".to_string(),
            ));
        }

        if self.max_queue_size == 0 {
            return Err(ConfigError::Invalid(
                "Max queue size must be greater than 0".to_string(),
            ));
        }

        if self.image_size_limit_dp <= 0 || self.bitmap_size_limit_bytes == 0 {
            return Err(ConfigError::Invalid(
                "Image size limits must be greater than 0".to_string(),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }
}
