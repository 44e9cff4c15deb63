//! Example demonstrating enumeration and custom kinds
//!
//! These have no struct-field spelling, so the schema is built by hand.

use envbind::{CustomType, DeclaredType, EnumType, Kind, Options, Schema, Value};

/// Single-argument string constructor for a user type: a non-reserved port.
fn port(raw: &str) -> Result<Value, String> {
    match raw.parse::<u16>() {
        Ok(p) if p >= 1024 => Ok(Value::Int(i64::from(p))),
        Ok(p) => Err(format!("port {p} is reserved")),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("LOG_LEVEL", "INFO");
    std::env::set_var("PORT", "8080");

    let level = EnumType::new("LogLevel", ["DEBUG", "INFO", "WARN", "ERROR"]);
    let schema = Schema::new("ServerConfig")
        .attr("log_level", DeclaredType::new(Kind::Enum(level)))
        .attr("port", DeclaredType::new(Kind::Custom(CustomType::new("Port", port))));

    let config = schema.from_env(&Options::default())?;

    println!("Log level: {:?}", config.get("log_level")?); // Enum member INFO
    println!("Port: {:?}", config.get("port")?); // Int(8080)

    // An unknown member name fails with the offending string and detail
    std::env::set_var("LOG_LEVEL", "LOUD");
    println!("Bad level: {}", schema.from_env(&Options::default()).unwrap_err());

    Ok(())
}
