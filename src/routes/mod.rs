/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated
/// modules. Access control is applied explicitly at the module level, so a
/// protected endpoint can never be exposed by accident.

/// Routes reachable without a session: health, the five role logins, and
/// logout (idempotent, so safe to expose unauthenticated).
pub mod public;

/// Routes restricted to sessions carrying the Admin role flag.
pub mod admin;

/// Dashboard routes for the four subordinate roles (College, Teacher,
/// Student, ClubRep). Each handler enforces its exact role; mutating
/// handlers additionally run the ownership guard.
pub mod portal;
