//! Basic usage example

use envbind::{EnvSchema, Options};

#[derive(EnvSchema)]
struct Config {
    // Required attribute: loaded from DATABASE_URL
    pub database_url: String,

    // With default value
    #[env(default = "127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env(default = 10)]
    pub max_connections: i64,

    // Boolean type: accepts 1/true/yes/on and 0/false/no/off
    #[env(default = false)]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Resolve the schema
    let config = Config::schema().from_env(&Options::default())?;

    println!("Configuration loaded:");
    println!("  Database URL: {:?}", config.get("database_url")?);
    println!("  Server Address: {:?}", config.get("server_addr")?);
    println!("  Max Connections: {:?}", config.get("max_connections")?);
    println!("  Debug Mode: {:?}", config.get("debug_mode")?);

    Ok(())
}
