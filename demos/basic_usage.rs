// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example.
//!
//! Writes a small `.env` file into a temporary directory, loads it, edits the store,
//! saves it back and finally applies it to the process environment.
//!
//! Run with: cargo run --example basic_usage

use hexenv::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join(".env");
    std::fs::write(
        &path,
        "# Demo settings\n\
         API_KEY=some-value\n\
         BUILD_NUMBER=5\n\
         NETWORK_TIMEOUT=10.5\n\
         ONBOARDING_ENABLED=true\n\
         MAIL_TEMPLATE=\"The \\\"Quoted\\\" Title\"\n",
    )?;

    let dotenv = Dotenv::new();

    println!("=== Loading {} ===", path.display());
    let mut store = dotenv.load(&path)?;
    for (key, value) in &store {
        println!("{:<20} {:<8} {}", key, value.type_name(), value);
    }

    println!("\n=== Typed access ===");
    let build: u32 = store["BUILD_NUMBER"].parse("BUILD_NUMBER")?;
    let timeout = store
        .get("NETWORK_TIMEOUT")
        .and_then(Value::as_f64)
        .unwrap_or(30.0);
    println!("build = {}, timeout = {}s", build, timeout);

    println!("\n=== Editing and saving ===");
    store.set("BUILD_NUMBER", Value::Integer(i64::from(build) + 1), true);
    store.set("API_KEY", Value::from("not-written"), false);
    store.remove("ONBOARDING_ENABLED");
    dotenv.save(&store, &path, true)?;
    print!("{}", std::fs::read_to_string(&path)?);

    println!("\n=== Applying to the process environment ===");
    let written = dotenv.configure(&path, false)?;
    println!("{} variables written", written);
    println!("BUILD_NUMBER = {:?}", std::env::var("BUILD_NUMBER").ok());

    Ok(())
}
