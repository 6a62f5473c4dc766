use std::env;

/// AppConfig
///
/// Holds the application's entire configuration state. Immutable once loaded,
/// so it can be shared freely across request handlers and startup tasks via
/// the unified application state.
#[derive(Clone)]
pub struct AppConfig {
    // Runtime environment marker. Controls log formatting and fail-fast rules.
    pub env: Env,
    // Address the HTTP listener binds to.
    pub bind_addr: String,
    // Email of the privileged base administrator seeded at startup.
    // This identity can never be deleted.
    pub base_admin_email: String,
    // Initial password for the base administrator. Only the salted hash is
    // ever persisted.
    pub base_admin_password: String,
    // Absolute session lifetime in seconds (2 hours in the reference setup).
    pub session_ttl_secs: i64,
}

/// Env
///
/// Defines the runtime context, used to switch between development defaults
/// and production-grade settings (mandatory secrets, JSON logs).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without requiring any environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: "127.0.0.1:0".to_string(),
            base_admin_email: "admin@portal.edu".to_string(),
            base_admin_password: "admin-local-only".to_string(),
            session_ttl_secs: 7200,
        }
    }
}

impl AppConfig {
    /// The canonical function for initializing configuration at startup.
    /// Reads all parameters from environment variables and implements the
    /// fail-fast principle.
    ///
    /// # Panics
    /// Panics if a critical variable required for the current runtime
    /// environment (especially Production) is not set. This prevents the
    /// application from starting with an incomplete or insecure
    /// configuration.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let base_admin_email =
            env::var("BASE_ADMIN_EMAIL").unwrap_or_else(|_| "admin@portal.edu".to_string());

        // The production seed password is mandatory and must be explicitly
        // set; a compiled-in default would be a standing credential leak.
        let base_admin_password = match env {
            Env::Production => env::var("BASE_ADMIN_PASSWORD")
                .expect("FATAL: BASE_ADMIN_PASSWORD must be set in production."),
            _ => {
                env::var("BASE_ADMIN_PASSWORD").unwrap_or_else(|_| "admin-local-only".to_string())
            }
        };

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(7200);

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            env,
            bind_addr,
            base_admin_email,
            base_admin_password,
            session_ttl_secs,
        }
    }
}
