use uuid::Uuid;

use crate::error::PortalError;
use crate::models::{
    AdminDashboard, ClubRepDashboard, CollegeDashboard, StudentDashboard, TeacherDashboard,
};
use crate::repository::Repository;

/// Dashboard aggregation: for an authenticated identity, fan-out reads of
/// every collection it owns, assembled into counts and listings. There is no
/// caching layer: each load reads the store directly, so any mutation is
/// visible on the very next load.
///
/// Ordering rules: time-scoped listings (assignments, circulars,
/// announcements) sort newest-first by creation time; schedule listings
/// (exams, events) sort soonest-first by their scheduled date.

pub async fn admin_dashboard(repo: &dyn Repository) -> Result<AdminDashboard, PortalError> {
    let mut colleges = repo.list_colleges().await?;
    let mut admins = repo.list_admins().await?;

    colleges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    admins.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    Ok(AdminDashboard {
        college_count: colleges.len(),
        admin_count: admins.len(),
        colleges,
        admins,
    })
}

pub async fn college_dashboard(
    repo: &dyn Repository,
    college_id: Uuid,
    college_name: String,
) -> Result<CollegeDashboard, PortalError> {
    let mut teachers = repo.list_teachers_by_college(college_id).await?;
    let mut students = repo.list_students_by_college(college_id).await?;
    let mut club_reps = repo.list_club_reps_by_college(college_id).await?;

    teachers.sort_by(|a, b| a.name.cmp(&b.name));
    students.sort_by(|a, b| a.usn.cmp(&b.usn));
    club_reps.sort_by(|a, b| a.club_name.cmp(&b.club_name));

    Ok(CollegeDashboard {
        college_name,
        teacher_count: teachers.len(),
        student_count: students.len(),
        club_rep_count: club_reps.len(),
        teachers,
        students,
        club_reps,
    })
}

pub async fn teacher_dashboard(
    repo: &dyn Repository,
    teacher_id: Uuid,
) -> Result<TeacherDashboard, PortalError> {
    let mut assignments = repo.list_assignments_by_teacher(teacher_id).await?;
    let mut circulars = repo.list_circulars_by_teacher(teacher_id).await?;
    let mut exams = repo.list_exams_by_teacher(teacher_id).await?;

    assignments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    circulars.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    exams.sort_by(|a, b| a.exam_date.cmp(&b.exam_date));

    Ok(TeacherDashboard {
        assignment_count: assignments.len(),
        circular_count: circulars.len(),
        exam_count: exams.len(),
        assignments,
        circulars,
        exams,
    })
}

/// The student view is college-wide and read-only: everything published by
/// any teacher of the student's college, same ordering as the teacher view.
pub async fn student_dashboard(
    repo: &dyn Repository,
    college_id: Uuid,
) -> Result<StudentDashboard, PortalError> {
    let college_name = repo
        .find_college_by_id(college_id)
        .await?
        .map(|c| c.college_name);

    let mut assignments = repo.list_assignments_by_college(college_id).await?;
    let mut circulars = repo.list_circulars_by_college(college_id).await?;
    let mut exams = repo.list_exams_by_college(college_id).await?;

    assignments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    circulars.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    exams.sort_by(|a, b| a.exam_date.cmp(&b.exam_date));

    Ok(StudentDashboard {
        college_name,
        assignments,
        circulars,
        exams,
    })
}

pub async fn club_rep_dashboard(
    repo: &dyn Repository,
    club_rep_id: Uuid,
) -> Result<ClubRepDashboard, PortalError> {
    let mut announcements = repo.list_announcements_by_club_rep(club_rep_id).await?;
    let mut members = repo.list_club_members_by_club_rep(club_rep_id).await?;
    let mut events = repo.list_events_by_club_rep(club_rep_id).await?;

    // Pinned announcements surface first, newest-first within each group.
    announcements.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(b.created_at.cmp(&a.created_at))
    });
    members.sort_by(|a, b| a.name.cmp(&b.name));
    events.sort_by(|a, b| a.event_date.cmp(&b.event_date));

    Ok(ClubRepDashboard {
        announcement_count: announcements.len(),
        member_count: members.len(),
        event_count: events.len(),
        announcements,
        members,
        events,
    })
}
