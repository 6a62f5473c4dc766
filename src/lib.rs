use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod credentials;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod repository;
pub mod sessions;

// Module for routing segregation (Public, Admin, Portal).
pub mod routes;
use auth::SessionUser; // The resolved authenticated session identity.
use routes::{admin, portal, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the application entry point.
pub use config::AppConfig;
pub use error::PortalError;
pub use repository::{InMemoryRepository, RepositoryState};
pub use sessions::{InMemorySessionStore, SessionState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation for the portal. Aggregates every
/// handler decorated with `#[utoipa::path]` and every payload schema; the
/// resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::admin_login, handlers::college_login, handlers::teacher_login,
        handlers::student_login, handlers::club_rep_login, handlers::logout,
        handlers::get_admin_dashboard, handlers::add_college, handlers::delete_college,
        handlers::add_admin, handlers::delete_admin,
        handlers::get_college_dashboard, handlers::add_teacher, handlers::delete_teacher,
        handlers::add_student, handlers::delete_student, handlers::add_club_rep,
        handlers::delete_club_rep,
        handlers::get_teacher_dashboard, handlers::add_assignment, handlers::delete_assignment,
        handlers::add_circular, handlers::delete_circular, handlers::add_exam,
        handlers::delete_exam,
        handlers::get_student_dashboard,
        handlers::get_club_rep_dashboard, handlers::add_announcement,
        handlers::delete_announcement, handlers::add_club_member, handlers::delete_club_member,
        handlers::add_event, handlers::delete_event
    ),
    components(
        schemas(
            models::Role, models::LoginRequest, models::LoginResponse,
            models::Admin, models::College, models::Teacher, models::Student, models::ClubRep,
            models::Assignment, models::Circular, models::ExamSchedule,
            models::ClubAnnouncement, models::ClubMember, models::Event,
            models::AddAdminRequest, models::AddCollegeRequest, models::AddTeacherRequest,
            models::AddStudentRequest, models::AddClubRepRequest, models::AddAssignmentRequest,
            models::AddCircularRequest, models::AddExamRequest, models::AddAnnouncementRequest,
            models::AddClubMemberRequest, models::AddEventRequest,
            models::AdminDashboard, models::CollegeDashboard, models::TeacherDashboard,
            models::StudentDashboard, models::ClubRepDashboard,
        )
    ),
    tags(
        (name = "campus-portal", description = "Multi-tenant campus administration API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding all essential
/// application services and configuration, shared across all incoming
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator, behind the `Repository` trait.
    pub repo: RepositoryState,
    /// Server-side session table, behind the `SessionStore` trait.
    pub sessions: SessionState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These allow extractors and handlers to selectively pull components from
// the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for SessionState {
    fn from_ref(app_state: &AppState) -> SessionState {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// session_middleware
///
/// Enforces session authentication for the protected route modules.
///
/// Mechanism: attempts to extract `SessionUser` from the request. A missing,
/// unknown, or expired token rejects with 401 before any handler runs. The
/// exact-role and ownership checks still happen inside the handlers via the
/// guard; this layer is only the outer authentication gate.
async fn session_middleware(_session_user: SessionUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: logins, logouts, health. No session required.
        .merge(public::public_routes())
        // Admin and portal routes sit behind the session gate. Role and
        // ownership checks run inside the handlers.
        .merge(
            admin::admin_routes()
                .merge(portal::portal_routes())
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    session_middleware,
                )),
        )
        // Apply the unified state to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (applied outermost)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID generation: a unique UUID per request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request tracing: wraps the request/response lifecycle
                // in a span correlated by the request id.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS layer.
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes TraceLayer's span creation: includes the `x-request-id` header
/// so every log line for a single request is correlated by a unique id.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
