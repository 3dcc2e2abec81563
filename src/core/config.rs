use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub mock_store: MockStoreConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Settings for the in-memory catalog that stands in for the backend
#[derive(Debug, Clone)]
pub struct MockStoreConfig {
    /// Artificial delay applied to every read
    pub latency: Duration,
    /// Seed for the generated product records
    pub seed: u64,
    /// Number of generated flat product records
    pub product_count: usize,
}

/// Limits for category browse views
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Deepest accepted node (roots are depth 0)
    pub max_tree_depth: usize,
    /// Maximum number of views open at the same time
    pub max_open_views: usize,
    /// Views untouched for this long are dropped
    pub view_idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            mock_store: MockStoreConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Catalog Admin API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the catalog admin dashboard".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl MockStoreConfig {
    const DEFAULT_LATENCY_MS: u64 = 300;
    const DEFAULT_SEED: u64 = 42;
    const DEFAULT_PRODUCT_COUNT: usize = 20;
    // Generated ids run 1..=count and must stay below the demo tree's product ids
    const MAX_PRODUCT_COUNT: usize = 200;

    pub fn from_env() -> Result<Self, String> {
        let latency_ms = env::var("MOCK_LATENCY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_LATENCY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "MOCK_LATENCY_MS must be a valid number".to_string())?;

        let seed = env::var("MOCK_SEED")
            .unwrap_or_else(|_| Self::DEFAULT_SEED.to_string())
            .parse::<u64>()
            .map_err(|_| "MOCK_SEED must be a valid number".to_string())?;

        let product_count = env::var("MOCK_PRODUCT_COUNT")
            .unwrap_or_else(|_| Self::DEFAULT_PRODUCT_COUNT.to_string())
            .parse::<usize>()
            .map_err(|_| "MOCK_PRODUCT_COUNT must be a valid number".to_string())?;

        if product_count > Self::MAX_PRODUCT_COUNT {
            return Err(format!(
                "MOCK_PRODUCT_COUNT must not exceed {}",
                Self::MAX_PRODUCT_COUNT
            ));
        }

        Ok(Self {
            latency: Duration::from_millis(latency_ms),
            seed,
            product_count,
        })
    }
}

impl CatalogConfig {
    const DEFAULT_MAX_TREE_DEPTH: usize = 32;
    const DEFAULT_MAX_OPEN_VIEWS: usize = 1024;
    const DEFAULT_VIEW_IDLE_TIMEOUT_SECS: u64 = 15 * 60;

    pub fn from_env() -> Result<Self, String> {
        let max_tree_depth = env::var("CATALOG_MAX_TREE_DEPTH")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_TREE_DEPTH.to_string())
            .parse::<usize>()
            .map_err(|_| "CATALOG_MAX_TREE_DEPTH must be a valid number".to_string())?;

        let max_open_views = env::var("CATALOG_MAX_OPEN_VIEWS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_OPEN_VIEWS.to_string())
            .parse::<usize>()
            .map_err(|_| "CATALOG_MAX_OPEN_VIEWS must be a valid number".to_string())?;

        if max_open_views == 0 {
            return Err("CATALOG_MAX_OPEN_VIEWS must be at least 1".to_string());
        }

        let idle_secs = env::var("CATALOG_VIEW_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_VIEW_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "CATALOG_VIEW_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        if idle_secs == 0 {
            return Err("CATALOG_VIEW_IDLE_TIMEOUT_SECS must be at least 1".to_string());
        }

        Ok(Self {
            max_tree_depth,
            max_open_views,
            view_idle_timeout: Duration::from_secs(idle_secs),
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_tree_depth: Self::DEFAULT_MAX_TREE_DEPTH,
            max_open_views: Self::DEFAULT_MAX_OPEN_VIEWS,
            view_idle_timeout: Duration::from_secs(Self::DEFAULT_VIEW_IDLE_TIMEOUT_SECS),
        }
    }
}
