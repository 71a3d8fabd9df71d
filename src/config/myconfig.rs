use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub frontend_url: String,
    pub port: u16,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let frontend_url =
            std::env::var("FRONTEND_URL").context("Missing environment variable: FRONTEND_URL")?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            Err(_) => 4000,
        };

        Ok(Self {
            database_url,
            frontend_url,
            port,
        })
    }
}
