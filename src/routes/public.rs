use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Endpoints reachable without an established session. Login endpoints are
/// the only way to obtain a session cookie; logout is public because
/// terminating an absent session is a harmless no-op.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated liveness probe for monitors and load balancers.
        .route("/health", get(|| async { "ok" }))
        // POST /{role}/login
        // One login endpoint per role collection. A session cookie is only
        // ever issued here, after credential verification.
        .route("/admin/login", post(handlers::admin_login))
        .route("/college/login", post(handlers::college_login))
        .route("/teacher/login", post(handlers::teacher_login))
        .route("/student/login", post(handlers::student_login))
        .route("/club-rep/login", post(handlers::club_rep_login))
        // POST /{role}/logout
        // All five paths share one handler: terminate whatever session the
        // cookie names and clear the cookie.
        .route("/admin/logout", post(handlers::logout))
        .route("/college/logout", post(handlers::logout))
        .route("/teacher/logout", post(handlers::logout))
        .route("/student/logout", post(handlers::logout))
        .route("/club-rep/logout", post(handlers::logout))
}
