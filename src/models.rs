use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Roles ---

/// Role
///
/// The five actor kinds recognized by the portal. Every session carries
/// exactly one of these flags, and every protected route requires an exact
/// match; there is no role hierarchy beyond Admin's ownership bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    College,
    Teacher,
    Student,
    ClubRep,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::College => "college",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::ClubRep => "club-rep",
        };
        f.write_str(name)
    }
}

// --- Credentialed Identities ---
//
// Each identity record stores a normalized (lowercased) email and a salted
// Argon2 hash. The hash fields are `skip_serializing` so no response body can
// ever carry them; `default` keeps the structs deserializable in tests.

/// Admin
///
/// A portal administrator. One distinguished record, the base admin whose
/// email is fixed by configuration, is seeded at startup and protected from
/// deletion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// College
///
/// A tenant. Every subordinate record in the system is owned by exactly one
/// college, directly or transitively.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct College {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub college_name: String,
    pub created_at: DateTime<Utc>,
}

/// Teacher
///
/// Created by its owning college. Owns the assignments, circulars, and exam
/// schedules it publishes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub college_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Student
///
/// Created by its owning college. The `usn` (university serial number) is
/// globally unique across all colleges.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub college_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub usn: String,
    pub phone_number: Option<String>,
    pub branch: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// ClubRep
///
/// A club representative, created by its owning college. Owns the club
/// announcements, members, and events it records.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubRep {
    pub id: Uuid,
    pub college_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub club_name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- Teacher-owned Records ---
//
// `college_id` is denormalized from the creating teacher so cross-cutting
// (student-facing) queries never need a join through the teacher record.

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub college_id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub subject: String,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CircularPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Circular {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub college_id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: CircularPriority,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    #[default]
    Midterm,
    Final,
    Quiz,
    Practical,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamSchedule {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub college_id: Uuid,
    pub subject: String,
    pub exam_date: DateTime<Utc>,
    // Human-readable slot, e.g. "10:00 AM - 12:00 PM".
    pub exam_time: String,
    pub location: String,
    pub exam_type: ExamType,
    pub total_marks: i32,
    // e.g. "2 hours".
    pub duration: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- ClubRep-owned Records ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementCategory {
    #[default]
    Update,
    Recruitment,
    Achievement,
    Highlight,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubAnnouncement {
    pub id: Uuid,
    pub club_rep_id: Uuid,
    pub college_id: Uuid,
    pub title: String,
    pub content: String,
    pub category: AnnouncementCategory,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MemberRole {
    President,
    VicePresident,
    Secretary,
    Treasurer,
    #[default]
    Member,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubMember {
    pub id: Uuid,
    pub club_rep_id: Uuid,
    pub college_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub roll_number: Option<String>,
    pub department: Option<String>,
    pub member_role: MemberRole,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Workshop,
    #[default]
    Meetup,
    Competition,
    Social,
    Webinar,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub club_rep_id: Uuid,
    pub college_id: Uuid,
    pub event_name: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    // Human-readable slot, e.g. "3:00 PM - 5:00 PM".
    pub event_time: String,
    pub location: String,
    pub capacity: Option<i32>,
    pub registered_count: i32,
    pub event_type: EventType,
    pub status: EventStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- Request Payloads (Input Schemas) ---

/// LoginRequest
///
/// Shared by all five role login endpoints. The email is normalized before
/// lookup, so any casing variant of a registered address authenticates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddAdminRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCollegeRequest {
    pub email: String,
    pub password: String,
    pub college_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTeacherRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub department: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddStudentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub usn: String,
    pub phone_number: Option<String>,
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddClubRepRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub club_name: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddAssignmentRequest {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub subject: String,
    pub attachment_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCircularRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: CircularPriority,
    pub attachment_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddExamRequest {
    pub subject: String,
    pub exam_date: DateTime<Utc>,
    pub exam_time: String,
    pub location: String,
    #[serde(default)]
    pub exam_type: ExamType,
    pub total_marks: i32,
    pub duration: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddAnnouncementRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: AnnouncementCategory,
    #[serde(default)]
    pub is_pinned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddClubMemberRequest {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub roll_number: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub member_role: MemberRole,
    #[serde(default)]
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddEventRequest {
    pub event_name: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub event_time: String,
    pub location: String,
    pub capacity: Option<i32>,
    #[serde(default)]
    pub event_type: EventType,
    pub image_url: Option<String>,
}

// --- Response Schemas ---

/// LoginResponse
///
/// Returned alongside the Set-Cookie header on successful login. Echoes the
/// resolved identity so the client can render without a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub role: Role,
    pub id: Uuid,
    pub display_name: String,
}

// --- Dashboard Schemas (Output) ---
//
// Each dashboard is a fan-out read of the collections owned by the
// authenticated identity: summary counts plus the full listings. Password
// hashes never appear (serde skip on the entity structs).

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboard {
    pub college_count: usize,
    pub admin_count: usize,
    pub colleges: Vec<College>,
    pub admins: Vec<Admin>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CollegeDashboard {
    pub college_name: String,
    pub teacher_count: usize,
    pub student_count: usize,
    pub club_rep_count: usize,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    pub club_reps: Vec<ClubRep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeacherDashboard {
    pub assignment_count: usize,
    pub circular_count: usize,
    pub exam_count: usize,
    // Newest-first by creation time.
    pub assignments: Vec<Assignment>,
    pub circulars: Vec<Circular>,
    // Soonest-first by exam date.
    pub exams: Vec<ExamSchedule>,
}

/// StudentDashboard
///
/// Read-only college-wide view: everything published by any teacher of the
/// student's college.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentDashboard {
    pub college_name: Option<String>,
    pub assignments: Vec<Assignment>,
    pub circulars: Vec<Circular>,
    pub exams: Vec<ExamSchedule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClubRepDashboard {
    pub announcement_count: usize,
    pub member_count: usize,
    pub event_count: usize,
    // Pinned first, then newest-first.
    pub announcements: Vec<ClubAnnouncement>,
    pub members: Vec<ClubMember>,
    // Soonest-first by event date.
    pub events: Vec<Event>,
}
