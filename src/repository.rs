use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::credentials::normalize_email;
use crate::error::PortalError;
use crate::models::{
    Admin, Assignment, Circular, ClubAnnouncement, ClubMember, ClubRep, College, Event,
    ExamSchedule, Student, Teacher,
};

/// Repository
///
/// The abstract contract for all persistence operations, per entity type:
/// create (enforcing uniqueness constraints), lookup by id or normalized
/// email, listing by owner, and delete by id. Handlers interact with the data
/// layer only through this trait, so the concrete store (in-memory here, a
/// database in a full deployment) is swappable.
///
/// Uniqueness enforcement lives in this collaborator: emails are unique per
/// role collection (callers normalize before storing), and a student's `usn`
/// is globally unique. Creates are atomic: on a constraint violation no
/// partial write survives.
///
/// Delete methods return `Ok(false)` for an absent record rather than an
/// error, leaving the idempotent-delete policy to the caller.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Admins ---
    async fn create_admin(&self, admin: Admin) -> Result<Admin, PortalError>;
    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, PortalError>;
    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, PortalError>;
    async fn list_admins(&self) -> Result<Vec<Admin>, PortalError>;
    async fn delete_admin(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Colleges ---
    async fn create_college(&self, college: College) -> Result<College, PortalError>;
    async fn find_college_by_email(&self, email: &str) -> Result<Option<College>, PortalError>;
    async fn find_college_by_id(&self, id: Uuid) -> Result<Option<College>, PortalError>;
    async fn list_colleges(&self) -> Result<Vec<College>, PortalError>;
    async fn delete_college(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Teachers ---
    async fn create_teacher(&self, teacher: Teacher) -> Result<Teacher, PortalError>;
    async fn find_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>, PortalError>;
    async fn find_teacher_by_id(&self, id: Uuid) -> Result<Option<Teacher>, PortalError>;
    async fn list_teachers_by_college(&self, college_id: Uuid)
    -> Result<Vec<Teacher>, PortalError>;
    async fn delete_teacher(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Students ---
    async fn create_student(&self, student: Student) -> Result<Student, PortalError>;
    async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>, PortalError>;
    async fn find_student_by_id(&self, id: Uuid) -> Result<Option<Student>, PortalError>;
    async fn list_students_by_college(&self, college_id: Uuid)
    -> Result<Vec<Student>, PortalError>;
    async fn delete_student(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Club Representatives ---
    async fn create_club_rep(&self, rep: ClubRep) -> Result<ClubRep, PortalError>;
    async fn find_club_rep_by_email(&self, email: &str) -> Result<Option<ClubRep>, PortalError>;
    async fn find_club_rep_by_id(&self, id: Uuid) -> Result<Option<ClubRep>, PortalError>;
    async fn list_club_reps_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<ClubRep>, PortalError>;
    async fn delete_club_rep(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Assignments ---
    async fn create_assignment(&self, assignment: Assignment) -> Result<Assignment, PortalError>;
    async fn find_assignment(&self, id: Uuid) -> Result<Option<Assignment>, PortalError>;
    async fn list_assignments_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<Assignment>, PortalError>;
    async fn list_assignments_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<Assignment>, PortalError>;
    async fn delete_assignment(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Circulars ---
    async fn create_circular(&self, circular: Circular) -> Result<Circular, PortalError>;
    async fn find_circular(&self, id: Uuid) -> Result<Option<Circular>, PortalError>;
    async fn list_circulars_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<Circular>, PortalError>;
    async fn list_circulars_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<Circular>, PortalError>;
    async fn delete_circular(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Exam Schedules ---
    async fn create_exam(&self, exam: ExamSchedule) -> Result<ExamSchedule, PortalError>;
    async fn find_exam(&self, id: Uuid) -> Result<Option<ExamSchedule>, PortalError>;
    async fn list_exams_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<ExamSchedule>, PortalError>;
    async fn list_exams_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<ExamSchedule>, PortalError>;
    async fn delete_exam(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Club Announcements ---
    async fn create_announcement(
        &self,
        announcement: ClubAnnouncement,
    ) -> Result<ClubAnnouncement, PortalError>;
    async fn find_announcement(&self, id: Uuid) -> Result<Option<ClubAnnouncement>, PortalError>;
    async fn list_announcements_by_club_rep(
        &self,
        club_rep_id: Uuid,
    ) -> Result<Vec<ClubAnnouncement>, PortalError>;
    async fn delete_announcement(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Club Members ---
    async fn create_club_member(&self, member: ClubMember) -> Result<ClubMember, PortalError>;
    async fn find_club_member(&self, id: Uuid) -> Result<Option<ClubMember>, PortalError>;
    async fn list_club_members_by_club_rep(
        &self,
        club_rep_id: Uuid,
    ) -> Result<Vec<ClubMember>, PortalError>;
    async fn delete_club_member(&self, id: Uuid) -> Result<bool, PortalError>;

    // --- Events ---
    async fn create_event(&self, event: Event) -> Result<Event, PortalError>;
    async fn find_event(&self, id: Uuid) -> Result<Option<Event>, PortalError>;
    async fn list_events_by_club_rep(&self, club_rep_id: Uuid) -> Result<Vec<Event>, PortalError>;
    async fn delete_event(&self, id: Uuid) -> Result<bool, PortalError>;
}

/// The concrete type used to share the persistence layer across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

#[derive(Default)]
struct Collections {
    admins: HashMap<Uuid, Admin>,
    colleges: HashMap<Uuid, College>,
    teachers: HashMap<Uuid, Teacher>,
    students: HashMap<Uuid, Student>,
    club_reps: HashMap<Uuid, ClubRep>,
    assignments: HashMap<Uuid, Assignment>,
    circulars: HashMap<Uuid, Circular>,
    exams: HashMap<Uuid, ExamSchedule>,
    announcements: HashMap<Uuid, ClubAnnouncement>,
    members: HashMap<Uuid, ClubMember>,
    events: HashMap<Uuid, Event>,
}

/// InMemoryRepository
///
/// The shipped `Repository` implementation: per-entity maps behind one
/// `RwLock`. Each operation takes the lock once and never awaits while
/// holding it, which gives the per-record atomicity the design requires
/// without any multi-record transaction machinery.
#[derive(Default)]
pub struct InMemoryRepository {
    inner: RwLock<Collections>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

// Lock poisoning only happens if another thread panicked mid-write; surface
// it as a persistence failure instead of propagating the panic.
macro_rules! read_store {
    ($self:ident) => {
        $self
            .inner
            .read()
            .map_err(|_| PortalError::Persistence("store lock poisoned".into()))?
    };
}

macro_rules! write_store {
    ($self:ident) => {
        $self
            .inner
            .write()
            .map_err(|_| PortalError::Persistence("store lock poisoned".into()))?
    };
}

#[async_trait]
impl Repository for InMemoryRepository {
    // --- Admins ---

    async fn create_admin(&self, admin: Admin) -> Result<Admin, PortalError> {
        let mut store = write_store!(self);
        let email = normalize_email(&admin.email);
        if store.admins.values().any(|a| a.email == email) {
            return Err(PortalError::DuplicateEmail);
        }
        let record = Admin { email, ..admin };
        store.admins.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, PortalError> {
        let store = read_store!(self);
        let email = normalize_email(email);
        Ok(store.admins.values().find(|a| a.email == email).cloned())
    }

    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, PortalError> {
        Ok(read_store!(self).admins.get(&id).cloned())
    }

    async fn list_admins(&self) -> Result<Vec<Admin>, PortalError> {
        Ok(read_store!(self).admins.values().cloned().collect())
    }

    async fn delete_admin(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).admins.remove(&id).is_some())
    }

    // --- Colleges ---

    async fn create_college(&self, college: College) -> Result<College, PortalError> {
        let mut store = write_store!(self);
        let email = normalize_email(&college.email);
        if store.colleges.values().any(|c| c.email == email) {
            return Err(PortalError::DuplicateEmail);
        }
        let record = College { email, ..college };
        store.colleges.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_college_by_email(&self, email: &str) -> Result<Option<College>, PortalError> {
        let store = read_store!(self);
        let email = normalize_email(email);
        Ok(store.colleges.values().find(|c| c.email == email).cloned())
    }

    async fn find_college_by_id(&self, id: Uuid) -> Result<Option<College>, PortalError> {
        Ok(read_store!(self).colleges.get(&id).cloned())
    }

    async fn list_colleges(&self) -> Result<Vec<College>, PortalError> {
        Ok(read_store!(self).colleges.values().cloned().collect())
    }

    async fn delete_college(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).colleges.remove(&id).is_some())
    }

    // --- Teachers ---

    async fn create_teacher(&self, teacher: Teacher) -> Result<Teacher, PortalError> {
        let mut store = write_store!(self);
        let email = normalize_email(&teacher.email);
        if store.teachers.values().any(|t| t.email == email) {
            return Err(PortalError::DuplicateEmail);
        }
        let record = Teacher { email, ..teacher };
        store.teachers.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>, PortalError> {
        let store = read_store!(self);
        let email = normalize_email(email);
        Ok(store.teachers.values().find(|t| t.email == email).cloned())
    }

    async fn find_teacher_by_id(&self, id: Uuid) -> Result<Option<Teacher>, PortalError> {
        Ok(read_store!(self).teachers.get(&id).cloned())
    }

    async fn list_teachers_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<Teacher>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .teachers
            .values()
            .filter(|t| t.college_id == college_id)
            .cloned()
            .collect())
    }

    async fn delete_teacher(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).teachers.remove(&id).is_some())
    }

    // --- Students ---

    async fn create_student(&self, student: Student) -> Result<Student, PortalError> {
        let mut store = write_store!(self);
        let email = normalize_email(&student.email);
        if store.students.values().any(|s| s.email == email) {
            return Err(PortalError::DuplicateEmail);
        }
        // The USN is unique across every college, not just the owning one.
        if store.students.values().any(|s| s.usn == student.usn) {
            return Err(PortalError::DuplicateUsn);
        }
        let record = Student { email, ..student };
        store.students.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_student_by_email(&self, email: &str) -> Result<Option<Student>, PortalError> {
        let store = read_store!(self);
        let email = normalize_email(email);
        Ok(store.students.values().find(|s| s.email == email).cloned())
    }

    async fn find_student_by_id(&self, id: Uuid) -> Result<Option<Student>, PortalError> {
        Ok(read_store!(self).students.get(&id).cloned())
    }

    async fn list_students_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<Student>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .students
            .values()
            .filter(|s| s.college_id == college_id)
            .cloned()
            .collect())
    }

    async fn delete_student(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).students.remove(&id).is_some())
    }

    // --- Club Representatives ---

    async fn create_club_rep(&self, rep: ClubRep) -> Result<ClubRep, PortalError> {
        let mut store = write_store!(self);
        let email = normalize_email(&rep.email);
        if store.club_reps.values().any(|r| r.email == email) {
            return Err(PortalError::DuplicateEmail);
        }
        let record = ClubRep { email, ..rep };
        store.club_reps.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_club_rep_by_email(&self, email: &str) -> Result<Option<ClubRep>, PortalError> {
        let store = read_store!(self);
        let email = normalize_email(email);
        Ok(store.club_reps.values().find(|r| r.email == email).cloned())
    }

    async fn find_club_rep_by_id(&self, id: Uuid) -> Result<Option<ClubRep>, PortalError> {
        Ok(read_store!(self).club_reps.get(&id).cloned())
    }

    async fn list_club_reps_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<ClubRep>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .club_reps
            .values()
            .filter(|r| r.college_id == college_id)
            .cloned()
            .collect())
    }

    async fn delete_club_rep(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).club_reps.remove(&id).is_some())
    }

    // --- Assignments ---

    async fn create_assignment(&self, assignment: Assignment) -> Result<Assignment, PortalError> {
        let mut store = write_store!(self);
        store.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn find_assignment(&self, id: Uuid) -> Result<Option<Assignment>, PortalError> {
        Ok(read_store!(self).assignments.get(&id).cloned())
    }

    async fn list_assignments_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<Assignment>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .assignments
            .values()
            .filter(|a| a.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn list_assignments_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<Assignment>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .assignments
            .values()
            .filter(|a| a.college_id == college_id)
            .cloned()
            .collect())
    }

    async fn delete_assignment(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).assignments.remove(&id).is_some())
    }

    // --- Circulars ---

    async fn create_circular(&self, circular: Circular) -> Result<Circular, PortalError> {
        let mut store = write_store!(self);
        store.circulars.insert(circular.id, circular.clone());
        Ok(circular)
    }

    async fn find_circular(&self, id: Uuid) -> Result<Option<Circular>, PortalError> {
        Ok(read_store!(self).circulars.get(&id).cloned())
    }

    async fn list_circulars_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<Circular>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .circulars
            .values()
            .filter(|c| c.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn list_circulars_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<Circular>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .circulars
            .values()
            .filter(|c| c.college_id == college_id)
            .cloned()
            .collect())
    }

    async fn delete_circular(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).circulars.remove(&id).is_some())
    }

    // --- Exam Schedules ---

    async fn create_exam(&self, exam: ExamSchedule) -> Result<ExamSchedule, PortalError> {
        let mut store = write_store!(self);
        store.exams.insert(exam.id, exam.clone());
        Ok(exam)
    }

    async fn find_exam(&self, id: Uuid) -> Result<Option<ExamSchedule>, PortalError> {
        Ok(read_store!(self).exams.get(&id).cloned())
    }

    async fn list_exams_by_teacher(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<ExamSchedule>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .exams
            .values()
            .filter(|e| e.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn list_exams_by_college(
        &self,
        college_id: Uuid,
    ) -> Result<Vec<ExamSchedule>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .exams
            .values()
            .filter(|e| e.college_id == college_id)
            .cloned()
            .collect())
    }

    async fn delete_exam(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).exams.remove(&id).is_some())
    }

    // --- Club Announcements ---

    async fn create_announcement(
        &self,
        announcement: ClubAnnouncement,
    ) -> Result<ClubAnnouncement, PortalError> {
        let mut store = write_store!(self);
        store
            .announcements
            .insert(announcement.id, announcement.clone());
        Ok(announcement)
    }

    async fn find_announcement(&self, id: Uuid) -> Result<Option<ClubAnnouncement>, PortalError> {
        Ok(read_store!(self).announcements.get(&id).cloned())
    }

    async fn list_announcements_by_club_rep(
        &self,
        club_rep_id: Uuid,
    ) -> Result<Vec<ClubAnnouncement>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .announcements
            .values()
            .filter(|a| a.club_rep_id == club_rep_id)
            .cloned()
            .collect())
    }

    async fn delete_announcement(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).announcements.remove(&id).is_some())
    }

    // --- Club Members ---

    async fn create_club_member(&self, member: ClubMember) -> Result<ClubMember, PortalError> {
        let mut store = write_store!(self);
        store.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn find_club_member(&self, id: Uuid) -> Result<Option<ClubMember>, PortalError> {
        Ok(read_store!(self).members.get(&id).cloned())
    }

    async fn list_club_members_by_club_rep(
        &self,
        club_rep_id: Uuid,
    ) -> Result<Vec<ClubMember>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .members
            .values()
            .filter(|m| m.club_rep_id == club_rep_id)
            .cloned()
            .collect())
    }

    async fn delete_club_member(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).members.remove(&id).is_some())
    }

    // --- Events ---

    async fn create_event(&self, event: Event) -> Result<Event, PortalError> {
        let mut store = write_store!(self);
        store.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_event(&self, id: Uuid) -> Result<Option<Event>, PortalError> {
        Ok(read_store!(self).events.get(&id).cloned())
    }

    async fn list_events_by_club_rep(&self, club_rep_id: Uuid) -> Result<Vec<Event>, PortalError> {
        let store = read_store!(self);
        Ok(store
            .events
            .values()
            .filter(|e| e.club_rep_id == club_rep_id)
            .cloned()
            .collect())
    }

    async fn delete_event(&self, id: Uuid) -> Result<bool, PortalError> {
        Ok(write_store!(self).events.remove(&id).is_some())
    }
}
