// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallback strategy example.
//!
//! Shows how the same key resolves differently depending on which source is consulted
//! first.
//!
//! Run with: cargo run --example fallback

use hexenv::prelude::*;
use std::sync::Arc;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(".env");
    std::fs::write(&path, "API_KEY=from-file\nNETWORK_RETRIES=3\n")?;

    let process: Arc<dyn ProcessEnv> = Arc::new(MemoryEnv::with_values([
        ("API_KEY", "from-process"),
        ("HOSTNAME", "build-agent-7"),
    ]));

    let strategies = [
        ("store, then process", FallbackStrategy::default()),
        (
            "process, then store",
            FallbackStrategy::new(
                DataSource::ProcessEnvironment,
                Some(DataSource::ConfigurationStore),
            ),
        ),
        (
            "store only",
            FallbackStrategy::only(DataSource::ConfigurationStore),
        ),
    ];

    for (label, strategy) in strategies {
        let dotenv = Dotenv::builder()
            .fallback(strategy)
            .process_env(Arc::clone(&process))
            .build();
        let env = dotenv.load_environment(&path)?;

        println!("=== {} ===", label);
        for key in ["API_KEY", "NETWORK_RETRIES", "HOSTNAME"] {
            match env.query(key) {
                Some(value) => println!("{:<16} {}", key, value),
                None => println!("{:<16} <unset>", key),
            }
        }
        println!("{:<16} {:?}\n", "apiKey", env.member("apiKey"));
    }

    Ok(())
}
