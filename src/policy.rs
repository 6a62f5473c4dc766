use uuid::Uuid;

use crate::error::PortalError;
use crate::models::Role;
use crate::sessions::Session;

/// Resource
///
/// The record kinds subject to ownership-checked mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    College,
    Teacher,
    Student,
    ClubRep,
    Assignment,
    Circular,
    ExamSchedule,
    ClubAnnouncement,
    ClubMember,
    Event,
}

/// Ownership
///
/// The ownership fields of the record being mutated, extracted by the
/// handler before the guard runs. Fields irrelevant to the record kind stay
/// `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ownership {
    pub college_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
    pub club_rep_id: Option<Uuid>,
}

type Comparator = fn(&Session, &Ownership) -> bool;

fn college_scope(session: &Session, owned: &Ownership) -> bool {
    owned.college_id.is_some() && owned.college_id == session.college_id
}

fn teacher_scope(session: &Session, owned: &Ownership) -> bool {
    owned.teacher_id == Some(session.identity_id)
}

fn club_rep_scope(session: &Session, owned: &Ownership) -> bool {
    owned.club_rep_id == Some(session.identity_id)
}

/// The declarative ownership policy: which role may mutate which resource
/// kind, and how ownership is compared. Anything absent from this table is
/// forbidden for non-admin roles. Admin is not listed: it bypasses ownership
/// entirely (but is still role-gated like everyone else).
static OWNERSHIP_POLICY: &[(Role, Resource, Comparator)] = &[
    // A college owns the staff and students it registered.
    (Role::College, Resource::Teacher, college_scope),
    (Role::College, Resource::Student, college_scope),
    (Role::College, Resource::ClubRep, college_scope),
    // A teacher owns the records it created.
    (Role::Teacher, Resource::Assignment, teacher_scope),
    (Role::Teacher, Resource::Circular, teacher_scope),
    (Role::Teacher, Resource::ExamSchedule, teacher_scope),
    // A club rep owns its club's records.
    (Role::ClubRep, Resource::ClubAnnouncement, club_rep_scope),
    (Role::ClubRep, Resource::ClubMember, club_rep_scope),
    (Role::ClubRep, Resource::Event, club_rep_scope),
];

/// Step 1 of the guard: the session must carry exactly the required role.
/// Anything else, including a valid session for a different role, is
/// `Unauthenticated`, and the caller is sent to that role's login.
pub fn require_role(session: &Session, required: Role) -> Result<(), PortalError> {
    if session.role != required {
        tracing::warn!(
            have = %session.role,
            want = %required,
            identity = %session.identity_id,
            "role gate rejected session"
        );
        return Err(PortalError::Unauthenticated);
    }
    Ok(())
}

/// Step 2 of the guard: ownership. Admin bypasses; every other role must
/// match the policy table comparator for the resource kind.
///
/// A rejection is a uniform `Unauthorized`; it never reveals whether the
/// resource exists under a different owner. The log line, however, records
/// the cross-tenant attempt precisely.
pub fn authorize_owner(
    session: &Session,
    resource: Resource,
    owned: &Ownership,
) -> Result<(), PortalError> {
    if session.role == Role::Admin {
        return Ok(());
    }

    let comparator = OWNERSHIP_POLICY
        .iter()
        .find(|(role, res, _)| *role == session.role && *res == resource)
        .map(|(_, _, cmp)| cmp);

    match comparator {
        Some(cmp) if cmp(session, owned) => Ok(()),
        Some(_) => {
            tracing::warn!(
                role = %session.role,
                identity = %session.identity_id,
                ?resource,
                "cross-tenant mutation refused"
            );
            Err(PortalError::Unauthorized)
        }
        None => {
            tracing::warn!(
                role = %session.role,
                identity = %session.identity_id,
                ?resource,
                "role has no mutation rights for resource"
            );
            Err(PortalError::Unauthorized)
        }
    }
}
