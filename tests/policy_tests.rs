use campus_portal::{
    error::PortalError,
    models::Role,
    policy::{Ownership, Resource, authorize_owner, require_role},
    sessions::Session,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

fn session(role: Role, identity_id: Uuid, college_id: Option<Uuid>) -> Session {
    Session {
        role,
        identity_id,
        college_id,
        display_name: "test".to_string(),
        expires_at: Utc::now() + Duration::hours(2),
    }
}

// --- Role Gate ---

#[test]
fn test_exact_role_passes_the_gate() {
    let s = session(Role::Teacher, Uuid::new_v4(), Some(Uuid::new_v4()));
    assert!(require_role(&s, Role::Teacher).is_ok());
}

#[test]
fn test_valid_session_for_another_role_is_unauthenticated() {
    // A student session on a teacher route is treated as not-logged-in, not
    // as forbidden: the caller is sent to the right login.
    let s = session(Role::Student, Uuid::new_v4(), Some(Uuid::new_v4()));
    let err = require_role(&s, Role::Teacher).expect_err("role mismatch");
    assert!(matches!(err, PortalError::Unauthenticated));
}

#[test]
fn test_admin_does_not_pass_subordinate_role_gates() {
    // Admin bypasses ownership, never the role gate.
    let s = session(Role::Admin, Uuid::new_v4(), None);
    assert!(require_role(&s, Role::College).is_err());
}

// --- Ownership Guard ---

#[test]
fn test_college_may_mutate_its_own_teacher() {
    let college = Uuid::new_v4();
    let s = session(Role::College, college, Some(college));
    let owned = Ownership {
        college_id: Some(college),
        ..Ownership::default()
    };
    assert!(authorize_owner(&s, Resource::Teacher, &owned).is_ok());
}

#[test]
fn test_college_cannot_mutate_another_colleges_teacher() {
    let college = Uuid::new_v4();
    let s = session(Role::College, college, Some(college));
    let owned = Ownership {
        college_id: Some(Uuid::new_v4()),
        ..Ownership::default()
    };
    let err = authorize_owner(&s, Resource::Teacher, &owned).expect_err("cross-tenant");
    assert!(matches!(err, PortalError::Unauthorized));
}

#[test]
fn test_teacher_owns_only_its_own_records() {
    let teacher = Uuid::new_v4();
    let college = Uuid::new_v4();
    let s = session(Role::Teacher, teacher, Some(college));

    let own = Ownership {
        teacher_id: Some(teacher),
        college_id: Some(college),
        ..Ownership::default()
    };
    assert!(authorize_owner(&s, Resource::Assignment, &own).is_ok());

    // Same college, different teacher: still refused. Ownership is by
    // creator, not by tenant.
    let colleague = Ownership {
        teacher_id: Some(Uuid::new_v4()),
        college_id: Some(college),
        ..Ownership::default()
    };
    let err = authorize_owner(&s, Resource::Assignment, &colleague).expect_err("not the creator");
    assert!(matches!(err, PortalError::Unauthorized));
}

#[test]
fn test_club_rep_scope_covers_all_three_club_resources() {
    let rep = Uuid::new_v4();
    let s = session(Role::ClubRep, rep, Some(Uuid::new_v4()));
    let own = Ownership {
        club_rep_id: Some(rep),
        ..Ownership::default()
    };

    for resource in [
        Resource::ClubAnnouncement,
        Resource::ClubMember,
        Resource::Event,
    ] {
        assert!(authorize_owner(&s, resource, &own).is_ok());
    }
}

#[test]
fn test_admin_bypasses_ownership_entirely() {
    let s = session(Role::Admin, Uuid::new_v4(), None);
    let foreign = Ownership {
        college_id: Some(Uuid::new_v4()),
        teacher_id: Some(Uuid::new_v4()),
        club_rep_id: Some(Uuid::new_v4()),
    };
    assert!(authorize_owner(&s, Resource::College, &foreign).is_ok());
    assert!(authorize_owner(&s, Resource::Assignment, &foreign).is_ok());
    assert!(authorize_owner(&s, Resource::Event, &foreign).is_ok());
}

#[test]
fn test_student_has_no_mutation_rights_at_all() {
    let student = Uuid::new_v4();
    let college = Uuid::new_v4();
    let s = session(Role::Student, student, Some(college));
    let owned = Ownership {
        college_id: Some(college),
        teacher_id: Some(student),
        club_rep_id: Some(student),
    };

    for resource in [
        Resource::Teacher,
        Resource::Assignment,
        Resource::ClubMember,
        Resource::Event,
    ] {
        let err = authorize_owner(&s, resource, &owned).expect_err("students are read-only");
        assert!(matches!(err, PortalError::Unauthorized));
    }
}

#[test]
fn test_role_cannot_mutate_resources_outside_its_scope() {
    // A teacher has no rights over club records, and vice versa, even when
    // the ownership ids happen to line up.
    let id = Uuid::new_v4();
    let teacher = session(Role::Teacher, id, Some(Uuid::new_v4()));
    let owned = Ownership {
        teacher_id: Some(id),
        club_rep_id: Some(id),
        ..Ownership::default()
    };
    assert!(authorize_owner(&teacher, Resource::ClubAnnouncement, &owned).is_err());

    let rep = session(Role::ClubRep, id, Some(Uuid::new_v4()));
    assert!(authorize_owner(&rep, Resource::Assignment, &owned).is_err());
}

#[test]
fn test_missing_ownership_field_never_matches() {
    // A record with no owning college recorded can never satisfy the
    // college comparator, even against a session with no college either.
    let s = session(Role::College, Uuid::new_v4(), None);
    let owned = Ownership::default();
    assert!(authorize_owner(&s, Resource::Teacher, &owned).is_err());
}
