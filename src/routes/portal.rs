use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Portal Router Module
///
/// Dashboard routes for the four subordinate roles. Every handler requires
/// its exact role; every delete handler runs the ownership guard against the
/// fetched record before mutating, so a college only ever touches its own
/// staff, a teacher its own records, a club rep its own club.
pub fn portal_routes() -> Router<AppState> {
    Router::new()
        // --- College: staff and student management ---
        .route("/college/dashboard", get(handlers::get_college_dashboard))
        .route(
            "/college/dashboard/add-teacher",
            post(handlers::add_teacher),
        )
        .route(
            "/college/dashboard/delete-teacher/{id}",
            post(handlers::delete_teacher),
        )
        .route(
            "/college/dashboard/add-student",
            post(handlers::add_student),
        )
        .route(
            "/college/dashboard/delete-student/{id}",
            post(handlers::delete_student),
        )
        .route(
            "/college/dashboard/add-club-rep",
            post(handlers::add_club_rep),
        )
        .route(
            "/college/dashboard/delete-club-rep/{id}",
            post(handlers::delete_club_rep),
        )
        // --- Teacher: published records ---
        .route("/teacher/dashboard", get(handlers::get_teacher_dashboard))
        .route(
            "/teacher/dashboard/add-assignment",
            post(handlers::add_assignment),
        )
        .route(
            "/teacher/dashboard/delete-assignment/{id}",
            post(handlers::delete_assignment),
        )
        .route(
            "/teacher/dashboard/add-circular",
            post(handlers::add_circular),
        )
        .route(
            "/teacher/dashboard/delete-circular/{id}",
            post(handlers::delete_circular),
        )
        .route("/teacher/dashboard/add-exam", post(handlers::add_exam))
        .route(
            "/teacher/dashboard/delete-exam/{id}",
            post(handlers::delete_exam),
        )
        // --- Student: read-only college-wide view ---
        .route("/student/dashboard", get(handlers::get_student_dashboard))
        // --- Club rep: club records ---
        .route("/club-rep/dashboard", get(handlers::get_club_rep_dashboard))
        .route(
            "/club-rep/dashboard/add-announcement",
            post(handlers::add_announcement),
        )
        .route(
            "/club-rep/dashboard/delete-announcement/{id}",
            post(handlers::delete_announcement),
        )
        .route(
            "/club-rep/dashboard/add-member",
            post(handlers::add_club_member),
        )
        .route(
            "/club-rep/dashboard/delete-member/{id}",
            post(handlers::delete_club_member),
        )
        .route("/club-rep/dashboard/add-event", post(handlers::add_event))
        .route(
            "/club-rep/dashboard/delete-event/{id}",
            post(handlers::delete_event),
        )
}
