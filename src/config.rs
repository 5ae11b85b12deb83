use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub seed_target: usize,
    pub seed_batch_size: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: std::env::var("DB_URL")
                .or_else(|_| std::env::var("DATABASE_URL"))
                .map_err(|_| {
                    anyhow::anyhow!("DB_URL or DATABASE_URL environment variable required")
                })
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("DB_URL cannot be empty");
                    }
                    if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
                        anyhow::bail!("DB_URL must start with postgresql:// or postgres://");
                    }
                    Ok(url)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            seed_target: std::env::var("LEAD_SEED_TARGET")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .map_err(|_| {
                    anyhow::anyhow!("LEAD_SEED_TARGET must be a non-negative integer")
                })?,
            seed_batch_size: std::env::var("LEAD_SEED_BATCH_SIZE")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("LEAD_SEED_BATCH_SIZE must be a positive integer"))
                .and_then(|size: usize| {
                    if size == 0 {
                        anyhow::bail!("LEAD_SEED_BATCH_SIZE must be at least 1");
                    }
                    Ok(size)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!(
            "Database URL: {}...",
            &config.database_url[..20.min(config.database_url.len())]
        );
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!(
            "Seed profile: {} leads in batches of {}",
            config.seed_target,
            config.seed_batch_size
        );

        Ok(config)
    }
}
