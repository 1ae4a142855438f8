// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dual-source resolver.
//!
//! [`Environment`] answers queries from a loaded [`EnvStore`] and the process
//! environment, consulting them in the order given by its [`FallbackStrategy`].

use crate::adapters::{ProcessEnvSource, SystemEnv};
use crate::domain::naming;
use crate::domain::{DataSource, EnvStore, EnvironmentService, FallbackStrategy, Value};
use crate::ports::{ProcessEnv, ValueSource};
use std::sync::Arc;

/// Resolves keys across a loaded store and the process environment.
///
/// Queries walk the strategy's sources in order and the first source that has the key
/// wins. Mutations only ever touch the store.
///
/// # Examples
///
/// ```rust
/// use hexenv::adapters::MemoryEnv;
/// use hexenv::domain::{DataSource, EnvStore, EnvironmentService, FallbackStrategy, Value};
/// use hexenv::service::Environment;
/// use std::sync::Arc;
///
/// let store = EnvStore::from_raw_pairs([("PORT", "8080")]).unwrap();
/// let env = Arc::new(MemoryEnv::with_values([("PORT", "9090"), ("HOST", "localhost")]));
///
/// let resolver = Environment::new(store, env, FallbackStrategy::default());
/// assert_eq!(resolver.query("PORT"), Some(Value::Integer(8080)));
/// assert_eq!(resolver.query("HOST"), Some(Value::from("localhost")));
/// assert_eq!(resolver.query("MISSING"), None);
/// ```
#[derive(Clone, Debug)]
pub struct Environment {
    store: EnvStore,
    process: ProcessEnvSource,
    strategy: FallbackStrategy,
}

impl Environment {
    /// Creates a resolver over `store` and `process_env`.
    pub fn new(
        store: EnvStore,
        process_env: Arc<dyn ProcessEnv>,
        strategy: FallbackStrategy,
    ) -> Self {
        Self {
            store,
            process: ProcessEnvSource::new(process_env),
            strategy,
        }
    }

    /// Creates a resolver over `store` and the real process environment, using the
    /// default strategy.
    pub fn with_system_env(store: EnvStore) -> Self {
        Self::new(store, Arc::new(SystemEnv::new()), FallbackStrategy::default())
    }

    /// Looks up a camel-case identifier by its environment key.
    ///
    /// `apiKey` resolves `API_KEY`, `buildNumber` resolves `BUILD_NUMBER`.
    pub fn member(&self, identifier: &str) -> Option<Value> {
        self.query(&naming::to_env_key(identifier))
    }

    /// Returns the store.
    pub fn store(&self) -> &EnvStore {
        &self.store
    }

    /// Returns the strategy.
    pub fn strategy(&self) -> FallbackStrategy {
        self.strategy
    }

    /// Replaces the strategy.
    pub fn set_strategy(&mut self, strategy: FallbackStrategy) {
        self.strategy = strategy;
    }

    /// Consumes the resolver, returning the store.
    pub fn into_store(self) -> EnvStore {
        self.store
    }

    fn source(&self, source: DataSource) -> &dyn ValueSource {
        match source {
            DataSource::ConfigurationStore => &self.store,
            DataSource::ProcessEnvironment => &self.process,
        }
    }
}

impl EnvironmentService for Environment {
    fn query(&self, key: &str) -> Option<Value> {
        self.strategy.sources().find_map(|source| {
            let value = self.source(source).lookup(key)?;
            tracing::trace!("Resolved '{}' from {}", key, source);
            Some(value)
        })
    }

    fn set(&mut self, key: &str, value: Value, overwrite: bool) -> bool {
        self.store.set(key, value, overwrite)
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.store.remove(key)
    }
}
