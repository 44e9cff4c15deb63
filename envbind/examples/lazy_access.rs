//! Example demonstrating deferred missing-variable checks
//!
//! With `lazy_missing` enabled, resolution succeeds even when a required
//! variable is absent; the error is raised on access instead, and every
//! other attribute remains usable.

use envbind::{EnvSchema, Options};

#[derive(EnvSchema)]
struct Config {
    pub cache_url: String,
    pub database_url: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("CACHE_URL", "redis://localhost");
    std::env::remove_var("DATABASE_URL");

    let options = Options {
        lazy_missing: true,
        ..Options::default()
    };
    let config = Config::schema().from_env(&options)?;

    // Resolved normally
    println!("Cache URL: {:?}", config.get("cache_url")?);

    // Raises the stored error on every access
    match config.get("database_url") {
        Err(err) => println!("Deferred error: {err}"),
        Ok(value) => println!("Database URL: {value:?}"),
    }

    Ok(())
}
