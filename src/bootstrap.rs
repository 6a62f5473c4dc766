use chrono::Utc;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::credentials::{self, normalize_email};
use crate::error::PortalError;
use crate::models::Admin;
use crate::repository::Repository;

/// Returns true when `email` names the protected base administrator. Every
/// admin-delete path consults this; the base admin can never be removed,
/// regardless of who asks.
pub fn is_base_admin(config: &AppConfig, email: &str) -> bool {
    normalize_email(email) == normalize_email(&config.base_admin_email)
}

/// Seeds the privileged base admin identity at process start.
///
/// Idempotent: running it N times yields exactly one record under the
/// configured base email. It runs once per process lifetime, not per
/// request: `main` calls it before the listener binds.
pub async fn seed_base_admin(
    repo: &dyn Repository,
    config: &AppConfig,
) -> Result<(), PortalError> {
    let email = normalize_email(&config.base_admin_email);

    if repo.find_admin_by_email(&email).await?.is_some() {
        tracing::info!(%email, "base admin already present, seeding skipped");
        return Ok(());
    }

    let password_hash = credentials::hash_password(config.base_admin_password.clone()).await?;
    let admin = Admin {
        id: Uuid::new_v4(),
        email: email.clone(),
        password_hash,
        created_at: Utc::now(),
    };

    match repo.create_admin(admin).await {
        Ok(_) => {
            tracing::info!(%email, "base admin seeded");
            Ok(())
        }
        // Lost a race against a concurrent seeder: the record exists, which
        // is exactly the state we wanted.
        Err(PortalError::DuplicateEmail) => Ok(()),
        Err(e) => Err(e),
    }
}
