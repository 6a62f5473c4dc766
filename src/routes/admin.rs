use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Admin Router Module
///
/// Routes exclusively for sessions carrying the Admin role flag: tenant
/// (college) management, the admin roster, and the administrative dashboard.
///
/// Access Control:
/// The session gate (SessionUser extractor) runs as a route layer above this
/// module; each handler then enforces the exact Admin role. Admin bypasses
/// ownership checks, except the base admin record, which no caller may
/// delete.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/dashboard
        // All colleges plus the admin roster, with summary counts.
        .route("/admin/dashboard", get(handlers::get_admin_dashboard))
        // POST /admin/dashboard/add-college
        .route(
            "/admin/dashboard/add-college",
            post(handlers::add_college),
        )
        // POST /admin/dashboard/delete-college/{id}
        .route(
            "/admin/dashboard/delete-college/{id}",
            post(handlers::delete_college),
        )
        // POST /admin/dashboard/add-admin
        .route("/admin/dashboard/add-admin", post(handlers::add_admin))
        // POST /admin/dashboard/delete-admin/{id}
        // Refused with 403 for the protected base admin.
        .route(
            "/admin/dashboard/delete-admin/{id}",
            post(handlers::delete_admin),
        )
}
