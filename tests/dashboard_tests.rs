use campus_portal::{
    dashboard,
    models::{
        AnnouncementCategory, Assignment, ClubAnnouncement, College, ExamSchedule, ExamType,
        Teacher,
    },
    repository::{InMemoryRepository, Repository},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
}

fn college(name: &str) -> College {
    College {
        id: Uuid::new_v4(),
        email: format!("{}@uni.edu", name.to_lowercase()),
        password_hash: "$argon2-placeholder".to_string(),
        college_name: name.to_string(),
        created_at: Utc::now(),
    }
}

fn teacher(college_id: Uuid, name: &str) -> Teacher {
    Teacher {
        id: Uuid::new_v4(),
        college_id,
        name: name.to_string(),
        email: format!("{}@uni.edu", name.to_lowercase().replace(' ', ".")),
        password_hash: "$argon2-placeholder".to_string(),
        phone_number: None,
        department: None,
        subject: None,
        created_at: Utc::now(),
    }
}

fn assignment(teacher_id: Uuid, college_id: Uuid, title: &str, created_at: DateTime<Utc>) -> Assignment {
    Assignment {
        id: Uuid::new_v4(),
        teacher_id,
        college_id,
        title: title.to_string(),
        description: "desc".to_string(),
        due_date: created_at + Duration::days(7),
        subject: "CS101".to_string(),
        attachment_url: None,
        created_at,
    }
}

fn exam(teacher_id: Uuid, college_id: Uuid, subject: &str, exam_date: DateTime<Utc>) -> ExamSchedule {
    ExamSchedule {
        id: Uuid::new_v4(),
        teacher_id,
        college_id,
        subject: subject.to_string(),
        exam_date,
        exam_time: "10:00 AM - 12:00 PM".to_string(),
        location: "Hall A".to_string(),
        exam_type: ExamType::Midterm,
        total_marks: 100,
        duration: "2 hours".to_string(),
        description: None,
        created_at: Utc::now(),
    }
}

fn announcement(
    club_rep_id: Uuid,
    college_id: Uuid,
    title: &str,
    is_pinned: bool,
    created_at: DateTime<Utc>,
) -> ClubAnnouncement {
    ClubAnnouncement {
        id: Uuid::new_v4(),
        club_rep_id,
        college_id,
        title: title.to_string(),
        content: "content".to_string(),
        category: AnnouncementCategory::Update,
        is_pinned,
        created_at,
    }
}

#[tokio::test]
async fn test_teacher_dashboard_orders_assignments_newest_first() {
    let repo = InMemoryRepository::new();
    let college_id = Uuid::new_v4();
    let t = repo.create_teacher(teacher(college_id, "Ada")).await.unwrap();

    repo.create_assignment(assignment(t.id, college_id, "oldest", at(8)))
        .await
        .unwrap();
    repo.create_assignment(assignment(t.id, college_id, "newest", at(12)))
        .await
        .unwrap();
    repo.create_assignment(assignment(t.id, college_id, "middle", at(10)))
        .await
        .unwrap();

    let dash = dashboard::teacher_dashboard(&repo, t.id).await.unwrap();
    let titles: Vec<&str> = dash.assignments.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
    assert_eq!(dash.assignment_count, 3);
}

#[tokio::test]
async fn test_teacher_dashboard_orders_exams_soonest_first() {
    let repo = InMemoryRepository::new();
    let college_id = Uuid::new_v4();
    let t = repo.create_teacher(teacher(college_id, "Ada")).await.unwrap();

    repo.create_exam(exam(t.id, college_id, "later", at(15)))
        .await
        .unwrap();
    repo.create_exam(exam(t.id, college_id, "sooner", at(9)))
        .await
        .unwrap();

    let dash = dashboard::teacher_dashboard(&repo, t.id).await.unwrap();
    let subjects: Vec<&str> = dash.exams.iter().map(|e| e.subject.as_str()).collect();
    assert_eq!(subjects, vec!["sooner", "later"]);
}

#[tokio::test]
async fn test_teacher_dashboard_excludes_other_teachers_records() {
    let repo = InMemoryRepository::new();
    let college_id = Uuid::new_v4();
    let mine = repo.create_teacher(teacher(college_id, "Ada")).await.unwrap();
    let theirs = repo.create_teacher(teacher(college_id, "Bob")).await.unwrap();

    repo.create_assignment(assignment(mine.id, college_id, "mine", at(9)))
        .await
        .unwrap();
    repo.create_assignment(assignment(theirs.id, college_id, "theirs", at(10)))
        .await
        .unwrap();

    let dash = dashboard::teacher_dashboard(&repo, mine.id).await.unwrap();
    assert_eq!(dash.assignment_count, 1);
    assert_eq!(dash.assignments[0].title, "mine");
}

#[tokio::test]
async fn test_student_dashboard_is_college_wide() {
    let repo = InMemoryRepository::new();
    let c = repo.create_college(college("Engineering")).await.unwrap();
    let other = repo.create_college(college("Arts")).await.unwrap();

    let t1 = repo.create_teacher(teacher(c.id, "Ada")).await.unwrap();
    let t2 = repo.create_teacher(teacher(c.id, "Bob")).await.unwrap();
    let foreign = repo.create_teacher(teacher(other.id, "Eve")).await.unwrap();

    repo.create_assignment(assignment(t1.id, c.id, "from ada", at(9)))
        .await
        .unwrap();
    repo.create_assignment(assignment(t2.id, c.id, "from bob", at(10)))
        .await
        .unwrap();
    repo.create_assignment(assignment(foreign.id, other.id, "other college", at(11)))
        .await
        .unwrap();

    let dash = dashboard::student_dashboard(&repo, c.id).await.unwrap();
    assert_eq!(dash.college_name.as_deref(), Some("Engineering"));
    // Both of this college's teachers are visible, the foreign one is not.
    let titles: Vec<&str> = dash.assignments.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["from bob", "from ada"]);
}

#[tokio::test]
async fn test_club_rep_dashboard_pins_float_to_the_top() {
    let repo = InMemoryRepository::new();
    let rep_id = Uuid::new_v4();
    let college_id = Uuid::new_v4();

    repo.create_announcement(announcement(rep_id, college_id, "old unpinned", false, at(8)))
        .await
        .unwrap();
    repo.create_announcement(announcement(rep_id, college_id, "old pinned", true, at(9)))
        .await
        .unwrap();
    repo.create_announcement(announcement(rep_id, college_id, "new unpinned", false, at(12)))
        .await
        .unwrap();
    repo.create_announcement(announcement(rep_id, college_id, "new pinned", true, at(11)))
        .await
        .unwrap();

    let dash = dashboard::club_rep_dashboard(&repo, rep_id).await.unwrap();
    let titles: Vec<&str> = dash.announcements.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["new pinned", "old pinned", "new unpinned", "old unpinned"]
    );
}

#[tokio::test]
async fn test_mutations_are_visible_on_the_next_load() {
    // No caching layer: a delete shows up immediately.
    let repo = InMemoryRepository::new();
    let college_id = Uuid::new_v4();
    let t = repo.create_teacher(teacher(college_id, "Ada")).await.unwrap();
    let a = repo
        .create_assignment(assignment(t.id, college_id, "transient", at(9)))
        .await
        .unwrap();

    let before = dashboard::teacher_dashboard(&repo, t.id).await.unwrap();
    assert_eq!(before.assignment_count, 1);

    assert!(repo.delete_assignment(a.id).await.unwrap());

    let after = dashboard::teacher_dashboard(&repo, t.id).await.unwrap();
    assert_eq!(after.assignment_count, 0);
    assert!(after.assignments.is_empty());
}

#[tokio::test]
async fn test_college_dashboard_counts_match_listings() {
    let repo = InMemoryRepository::new();
    let c = repo.create_college(college("Engineering")).await.unwrap();
    repo.create_teacher(teacher(c.id, "Bob")).await.unwrap();
    repo.create_teacher(teacher(c.id, "Ada")).await.unwrap();

    let dash = dashboard::college_dashboard(&repo, c.id, c.college_name.clone())
        .await
        .unwrap();
    assert_eq!(dash.teacher_count, dash.teachers.len());
    assert_eq!(dash.teacher_count, 2);
    // Teachers sort by name.
    assert_eq!(dash.teachers[0].name, "Ada");
    assert_eq!(dash.student_count, 0);
    assert_eq!(dash.club_rep_count, 0);
}

#[tokio::test]
async fn test_dashboard_json_never_carries_password_hashes() {
    let repo = InMemoryRepository::new();
    let c = repo.create_college(college("Engineering")).await.unwrap();
    repo.create_teacher(teacher(c.id, "Ada")).await.unwrap();

    let dash = dashboard::college_dashboard(&repo, c.id, c.college_name.clone())
        .await
        .unwrap();
    let json = serde_json::to_value(&dash).unwrap();

    let teacher_obj = &json["teachers"][0];
    assert!(teacher_obj.get("password_hash").is_none());
    assert_eq!(teacher_obj["name"], "Ada");
}
