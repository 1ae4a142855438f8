// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data sources and the fallback strategy used to resolve keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A place a key can be resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// The loaded [`EnvStore`](crate::domain::EnvStore).
    ConfigurationStore,
    /// The live process environment.
    ProcessEnvironment,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::ConfigurationStore => f.write_str("store"),
            DataSource::ProcessEnvironment => f.write_str("process-env"),
        }
    }
}

/// The ordered pair of sources consulted when resolving a key.
///
/// The primary source is always consulted. The secondary, if any, is consulted only when
/// the primary has no value. A secondary equal to the primary is disabled on
/// construction, since querying one source twice is meaningless.
///
/// # Examples
///
/// ```
/// use hexenv::domain::{DataSource, FallbackStrategy};
///
/// let strategy = FallbackStrategy::default();
/// assert_eq!(strategy.primary(), DataSource::ConfigurationStore);
/// assert_eq!(strategy.secondary(), Some(DataSource::ProcessEnvironment));
///
/// let same = FallbackStrategy::new(
///     DataSource::ProcessEnvironment,
///     Some(DataSource::ProcessEnvironment),
/// );
/// assert_eq!(same.secondary(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackStrategy {
    primary: DataSource,
    secondary: Option<DataSource>,
}

impl FallbackStrategy {
    /// Creates a strategy, disabling a secondary that equals the primary.
    pub fn new(primary: DataSource, secondary: Option<DataSource>) -> Self {
        Self {
            primary,
            secondary: secondary.filter(|s| *s != primary),
        }
    }

    /// Creates a strategy that consults a single source.
    pub fn only(source: DataSource) -> Self {
        Self::new(source, None)
    }

    /// Returns the primary source.
    pub fn primary(&self) -> DataSource {
        self.primary
    }

    /// Returns the secondary source, if enabled.
    pub fn secondary(&self) -> Option<DataSource> {
        self.secondary
    }

    /// Returns the sources in the order they are consulted.
    pub fn sources(&self) -> impl Iterator<Item = DataSource> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl Default for FallbackStrategy {
    fn default() -> Self {
        Self::new(
            DataSource::ConfigurationStore,
            Some(DataSource::ProcessEnvironment),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy() {
        let strategy = FallbackStrategy::default();
        assert_eq!(
            strategy.sources().collect::<Vec<_>>(),
            vec![DataSource::ConfigurationStore, DataSource::ProcessEnvironment]
        );
    }

    #[test]
    fn test_same_secondary_disabled() {
        let strategy = FallbackStrategy::new(
            DataSource::ConfigurationStore,
            Some(DataSource::ConfigurationStore),
        );
        assert_eq!(strategy.secondary(), None);
        assert_eq!(strategy.sources().count(), 1);
    }

    #[test]
    fn test_only() {
        let strategy = FallbackStrategy::only(DataSource::ProcessEnvironment);
        assert_eq!(
            strategy.sources().collect::<Vec<_>>(),
            vec![DataSource::ProcessEnvironment]
        );
    }

    #[test]
    fn test_reversed_order() {
        let strategy = FallbackStrategy::new(
            DataSource::ProcessEnvironment,
            Some(DataSource::ConfigurationStore),
        );
        assert_eq!(strategy.primary(), DataSource::ProcessEnvironment);
        assert_eq!(
            strategy.sources().collect::<Vec<_>>(),
            vec![DataSource::ProcessEnvironment, DataSource::ConfigurationStore]
        );
    }

    #[test]
    fn test_data_source_display() {
        assert_eq!(DataSource::ConfigurationStore.to_string(), "store");
        assert_eq!(DataSource::ProcessEnvironment.to_string(), "process-env");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&FallbackStrategy::default()).unwrap();
        assert_eq!(
            json,
            r#"{"primary":"configuration_store","secondary":"process_environment"}"#
        );
    }
}
