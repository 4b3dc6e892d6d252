//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the session store, user directory, style configuration, and config.

use mockpay_core::{
    CheckoutBase, SessionMode, SessionStore, StyleConfig, UserDirectory, DEFAULT_CHECKOUT_BASE,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL for customer redirects
    pub checkout_base_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Session behavior (mock or strict)
    pub session_mode: SessionMode,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            checkout_base_url: std::env::var("CHECKOUT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CHECKOUT_BASE.to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            session_mode: std::env::var("SESSION_MODE")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment session store
    pub sessions: SessionStore,
    /// User directory
    pub users: UserDirectory,
    /// Checkout style configuration
    pub style: StyleConfig,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from the environment
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(AppConfig::from_env())
    }

    /// Create a new AppState from an explicit configuration
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let style = load_style_config()?;
        let sessions = SessionStore::new(
            config.session_mode,
            CheckoutBase::new(config.checkout_base_url.clone()),
        );

        Ok(Self {
            sessions,
            users: UserDirectory::new(),
            style,
            config,
        })
    }

    /// Assemble an AppState from pre-built components
    pub fn with_components(
        config: AppConfig,
        sessions: SessionStore,
        users: UserDirectory,
        style: StyleConfig,
    ) -> Self {
        Self {
            sessions,
            users,
            style,
            config,
        }
    }
}

/// Load checkout style from config file
fn load_style_config() -> anyhow::Result<StyleConfig> {
    // Try to load from config/style.toml
    let config_paths = [
        "config/style.toml",
        "../config/style.toml",
        "../../config/style.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let style = StyleConfig::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded checkout style from {}", path);
            return Ok(style);
        }
    }

    // Fall back to the built-in theme if no config found
    tracing::warn!("No style config found, using built-in light theme");
    Ok(StyleConfig::light())
}
