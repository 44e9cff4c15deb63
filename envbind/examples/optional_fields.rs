//! Example demonstrating Option<T> for optional attributes

use envbind::{EnvSchema, Options};

#[derive(EnvSchema)]
struct Config {
    // Required attribute
    pub app_name: String,

    // Optional attributes resolve to "no value" if not set
    pub api_key: Option<String>,
    pub port: Option<u16>,
    pub debug: Option<bool>,

    // An explicit default beats the implicit "no value" default
    #[env(default = "eu-west-1")]
    pub region: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Set only some environment variables
    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("PORT", "8080");
    // API_KEY, DEBUG, REGION not set

    let config = Config::schema().from_env(&Options::default())?;

    println!("Configuration:");
    println!("  App Name: {:?}", config.get("app_name")?);
    println!("  API Key: {:?}", config.get("api_key")?); // None
    println!("  Port: {:?}", config.get("port")?); // Some(Int(8080))
    println!("  Debug: {:?}", config.get("debug")?); // None
    println!("  Region: {:?}", config.get("region")?); // Some(Str("eu-west-1"))

    Ok(())
}
