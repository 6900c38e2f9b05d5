use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_pool_size: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").unwrap_or_else(|_| "true".to_string());
        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_pool_size = std::env::var("DB_POOL_SIZE")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_POOL_SIZE must be a valid u32 integer")?;

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            db_pool_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so everything lives in one test.
    #[test]
    fn init_reads_defaults_and_overrides() {
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://localhost/store");
            std::env::set_var("JWT_SECRET", "secret");
            std::env::remove_var("RUN_MIGRATIONS");
            std::env::remove_var("PORT");
            std::env::remove_var("DB_POOL_SIZE");
        }

        let config = Config::init().unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.db_pool_size, 5);
        assert!(config.run_migrations);

        unsafe {
            std::env::set_var("PORT", "9001");
            std::env::set_var("DB_POOL_SIZE", "12");
            std::env::set_var("RUN_MIGRATIONS", "false");
        }

        let config = Config::init().unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.db_pool_size, 12);
        assert!(!config.run_migrations);

        unsafe {
            std::env::set_var("DB_POOL_SIZE", "not-a-number");
        }
        assert!(Config::init().is_err());

        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("DB_POOL_SIZE");
            std::env::remove_var("RUN_MIGRATIONS");
        }
    }
}
