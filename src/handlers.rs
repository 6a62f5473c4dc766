use crate::{
    AppState,
    auth::{self, SessionUser},
    bootstrap,
    config::AppConfig,
    credentials::{self, normalize_email},
    dashboard,
    error::{PortalError, require_field},
    models::{
        AddAdminRequest, AddAnnouncementRequest, AddAssignmentRequest, AddCircularRequest,
        AddClubMemberRequest, AddClubRepRequest, AddCollegeRequest, AddEventRequest,
        AddExamRequest, AddStudentRequest, AddTeacherRequest, Admin, AdminDashboard, Assignment,
        Circular, ClubAnnouncement, ClubMember, ClubRep, ClubRepDashboard, College,
        CollegeDashboard, Event, EventStatus, ExamSchedule, LoginRequest, LoginResponse, Role,
        Student, StudentDashboard, Teacher, TeacherDashboard,
    },
    policy::{Ownership, Resource, authorize_owner, require_role},
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

// --- Login / Logout ---

/// Assembles the successful-login response: the session cookie plus the
/// resolved identity, so the client can render without a second round trip.
fn login_ok(
    config: &AppConfig,
    token: String,
    role: Role,
    id: Uuid,
    display_name: String,
) -> impl IntoResponse + use<> {
    (
        [(
            header::SET_COOKIE,
            auth::session_cookie(&token, config.session_ttl_secs),
        )],
        Json(LoginResponse {
            role,
            id,
            display_name,
        }),
    )
}

/// admin_login
///
/// [Public Route] Verifies admin credentials and establishes a session.
/// An unknown email and a wrong password are indistinguishable to the
/// client; only the log tells them apart.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses((status = 200, description = "Logged in", body = LoginResponse))
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, PortalError> {
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;

    let Some(admin) = state.repo.find_admin_by_email(&payload.email).await? else {
        tracing::info!(role = %Role::Admin, "login attempt for unknown email");
        return Err(PortalError::WrongPassword);
    };
    credentials::verify_password(payload.password, admin.password_hash.clone()).await?;

    let token = state
        .sessions
        .create(Role::Admin, admin.id, None, admin.email.clone())
        .await;
    Ok(login_ok(
        &state.config,
        token,
        Role::Admin,
        admin.id,
        admin.email,
    ))
}

/// college_login
///
/// [Public Route] Verifies college credentials and establishes a session.
/// A college session's ownership scope is its own identity id.
#[utoipa::path(
    post,
    path = "/college/login",
    request_body = LoginRequest,
    responses((status = 200, description = "Logged in", body = LoginResponse))
)]
pub async fn college_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, PortalError> {
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;

    let Some(college) = state.repo.find_college_by_email(&payload.email).await? else {
        tracing::info!(role = %Role::College, "login attempt for unknown email");
        return Err(PortalError::WrongPassword);
    };
    credentials::verify_password(payload.password, college.password_hash.clone()).await?;

    let token = state
        .sessions
        .create(
            Role::College,
            college.id,
            Some(college.id),
            college.college_name.clone(),
        )
        .await;
    Ok(login_ok(
        &state.config,
        token,
        Role::College,
        college.id,
        college.college_name,
    ))
}

/// teacher_login
#[utoipa::path(
    post,
    path = "/teacher/login",
    request_body = LoginRequest,
    responses((status = 200, description = "Logged in", body = LoginResponse))
)]
pub async fn teacher_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, PortalError> {
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;

    let Some(teacher) = state.repo.find_teacher_by_email(&payload.email).await? else {
        tracing::info!(role = %Role::Teacher, "login attempt for unknown email");
        return Err(PortalError::WrongPassword);
    };
    credentials::verify_password(payload.password, teacher.password_hash.clone()).await?;

    let token = state
        .sessions
        .create(
            Role::Teacher,
            teacher.id,
            Some(teacher.college_id),
            teacher.name.clone(),
        )
        .await;
    Ok(login_ok(
        &state.config,
        token,
        Role::Teacher,
        teacher.id,
        teacher.name,
    ))
}

/// student_login
#[utoipa::path(
    post,
    path = "/student/login",
    request_body = LoginRequest,
    responses((status = 200, description = "Logged in", body = LoginResponse))
)]
pub async fn student_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, PortalError> {
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;

    let Some(student) = state.repo.find_student_by_email(&payload.email).await? else {
        tracing::info!(role = %Role::Student, "login attempt for unknown email");
        return Err(PortalError::WrongPassword);
    };
    credentials::verify_password(payload.password, student.password_hash.clone()).await?;

    let token = state
        .sessions
        .create(
            Role::Student,
            student.id,
            Some(student.college_id),
            student.name.clone(),
        )
        .await;
    Ok(login_ok(
        &state.config,
        token,
        Role::Student,
        student.id,
        student.name,
    ))
}

/// club_rep_login
#[utoipa::path(
    post,
    path = "/club-rep/login",
    request_body = LoginRequest,
    responses((status = 200, description = "Logged in", body = LoginResponse))
)]
pub async fn club_rep_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, PortalError> {
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;

    let Some(rep) = state.repo.find_club_rep_by_email(&payload.email).await? else {
        tracing::info!(role = %Role::ClubRep, "login attempt for unknown email");
        return Err(PortalError::WrongPassword);
    };
    credentials::verify_password(payload.password, rep.password_hash.clone()).await?;

    let token = state
        .sessions
        .create(Role::ClubRep, rep.id, Some(rep.college_id), rep.name.clone())
        .await;
    Ok(login_ok(
        &state.config,
        token,
        Role::ClubRep,
        rep.id,
        rep.name,
    ))
}

/// logout
///
/// [Public Route] Terminates the session named by the cookie, if any, and
/// clears the cookie. Idempotent: logging out twice, or with no session at
/// all, is a no-op. Shared by all five roles.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 204, description = "Session terminated"))
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = auth::token_from_headers(&headers) {
        state.sessions.terminate(&token).await;
    }
    (
        [(header::SET_COOKIE, auth::clear_session_cookie())],
        StatusCode::NO_CONTENT,
    )
}

// --- Admin Dashboard ---

/// get_admin_dashboard
///
/// [Admin Route] All colleges and the admin roster, with summary counts.
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses((status = 200, description = "Dashboard", body = AdminDashboard))
)]
pub async fn get_admin_dashboard(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<AdminDashboard>, PortalError> {
    require_role(&session, Role::Admin)?;
    Ok(Json(dashboard::admin_dashboard(state.repo.as_ref()).await?))
}

/// add_college
///
/// [Admin Route] Registers a new college tenant. The password is hashed
/// before any store call, so a duplicate-email failure leaves no partial
/// write.
#[utoipa::path(
    post,
    path = "/admin/dashboard/add-college",
    request_body = AddCollegeRequest,
    responses((status = 201, description = "Created", body = College))
)]
pub async fn add_college(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddCollegeRequest>,
) -> Result<(StatusCode, Json<College>), PortalError> {
    require_role(&session, Role::Admin)?;
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;
    require_field("college_name", &payload.college_name)?;

    let password_hash = credentials::hash_password(payload.password).await?;
    let college = College {
        id: Uuid::new_v4(),
        email: normalize_email(&payload.email),
        password_hash,
        college_name: payload.college_name,
        created_at: Utc::now(),
    };
    let created = state.repo.create_college(college).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_college
///
/// [Admin Route] Removes a college. Admin bypasses ownership checks but is
/// still role-gated. Deleting an absent college is silent success.
#[utoipa::path(
    post,
    path = "/admin/dashboard/delete-college/{id}",
    params(("id" = Uuid, Path, description = "College ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_college(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::Admin)?;

    match state.repo.find_college_by_id(id).await? {
        None => {
            tracing::info!(%id, "delete of missing college treated as success");
        }
        Some(college) => {
            authorize_owner(
                &session,
                Resource::College,
                &Ownership {
                    college_id: Some(college.id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_college(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// add_admin
///
/// [Admin Route] Registers a further administrator identity.
#[utoipa::path(
    post,
    path = "/admin/dashboard/add-admin",
    request_body = AddAdminRequest,
    responses((status = 201, description = "Created", body = Admin))
)]
pub async fn add_admin(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddAdminRequest>,
) -> Result<(StatusCode, Json<Admin>), PortalError> {
    require_role(&session, Role::Admin)?;
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;

    let password_hash = credentials::hash_password(payload.password).await?;
    let admin = Admin {
        id: Uuid::new_v4(),
        email: normalize_email(&payload.email),
        password_hash,
        created_at: Utc::now(),
    };
    let created = state.repo.create_admin(admin).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_admin
///
/// [Admin Route] Removes an administrator, except the base admin, which is
/// permanently protected regardless of caller.
#[utoipa::path(
    post,
    path = "/admin/dashboard/delete-admin/{id}",
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Base admin is protected")
    )
)]
pub async fn delete_admin(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::Admin)?;

    match state.repo.find_admin_by_id(id).await? {
        None => {
            tracing::info!(%id, "delete of missing admin treated as success");
        }
        Some(admin) if bootstrap::is_base_admin(&state.config, &admin.email) => {
            tracing::warn!(%id, "refused deletion of the base admin");
            return Err(PortalError::ProtectedRecord);
        }
        Some(_) => {
            state.repo.delete_admin(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- College Dashboard ---

/// get_college_dashboard
///
/// [College Route] The college's own staff and students, with counts.
#[utoipa::path(
    get,
    path = "/college/dashboard",
    responses((status = 200, description = "Dashboard", body = CollegeDashboard))
)]
pub async fn get_college_dashboard(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<CollegeDashboard>, PortalError> {
    require_role(&session, Role::College)?;
    Ok(Json(
        dashboard::college_dashboard(
            state.repo.as_ref(),
            session.identity_id,
            session.display_name.clone(),
        )
        .await?,
    ))
}

/// add_teacher
///
/// [College Route] Registers a teacher owned by the authenticated college.
/// The owning college comes from the session, never from the payload.
#[utoipa::path(
    post,
    path = "/college/dashboard/add-teacher",
    request_body = AddTeacherRequest,
    responses((status = 201, description = "Created", body = Teacher))
)]
pub async fn add_teacher(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddTeacherRequest>,
) -> Result<(StatusCode, Json<Teacher>), PortalError> {
    require_role(&session, Role::College)?;
    require_field("name", &payload.name)?;
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;

    let password_hash = credentials::hash_password(payload.password).await?;
    let teacher = Teacher {
        id: Uuid::new_v4(),
        college_id: session.identity_id,
        name: payload.name,
        email: normalize_email(&payload.email),
        password_hash,
        phone_number: payload.phone_number,
        department: payload.department,
        subject: payload.subject,
        created_at: Utc::now(),
    };
    let created = state.repo.create_teacher(teacher).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_teacher
///
/// [College Route] Removes a teacher the college owns. A cross-tenant
/// attempt and a missing record are indistinguishable to the client.
#[utoipa::path(
    post,
    path = "/college/dashboard/delete-teacher/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_teacher(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::College)?;

    match state.repo.find_teacher_by_id(id).await? {
        None => {
            tracing::info!(%id, "delete of missing teacher treated as success");
        }
        Some(teacher) => {
            authorize_owner(
                &session,
                Resource::Teacher,
                &Ownership {
                    college_id: Some(teacher.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_teacher(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// add_student
///
/// [College Route] Registers a student. Enforces the globally unique USN.
#[utoipa::path(
    post,
    path = "/college/dashboard/add-student",
    request_body = AddStudentRequest,
    responses(
        (status = 201, description = "Created", body = Student),
        (status = 409, description = "Duplicate email or USN")
    )
)]
pub async fn add_student(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddStudentRequest>,
) -> Result<(StatusCode, Json<Student>), PortalError> {
    require_role(&session, Role::College)?;
    require_field("name", &payload.name)?;
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;
    require_field("usn", &payload.usn)?;

    let password_hash = credentials::hash_password(payload.password).await?;
    let student = Student {
        id: Uuid::new_v4(),
        college_id: session.identity_id,
        name: payload.name,
        email: normalize_email(&payload.email),
        password_hash,
        usn: payload.usn,
        phone_number: payload.phone_number,
        branch: payload.branch,
        created_at: Utc::now(),
    };
    let created = state.repo.create_student(student).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_student
#[utoipa::path(
    post,
    path = "/college/dashboard/delete-student/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_student(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::College)?;

    match state.repo.find_student_by_id(id).await? {
        None => {
            tracing::info!(%id, "delete of missing student treated as success");
        }
        Some(student) => {
            authorize_owner(
                &session,
                Resource::Student,
                &Ownership {
                    college_id: Some(student.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_student(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// add_club_rep
///
/// [College Route] Registers a club representative for this college.
#[utoipa::path(
    post,
    path = "/college/dashboard/add-club-rep",
    request_body = AddClubRepRequest,
    responses((status = 201, description = "Created", body = ClubRep))
)]
pub async fn add_club_rep(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddClubRepRequest>,
) -> Result<(StatusCode, Json<ClubRep>), PortalError> {
    require_role(&session, Role::College)?;
    require_field("name", &payload.name)?;
    require_field("email", &payload.email)?;
    require_field("password", &payload.password)?;
    require_field("club_name", &payload.club_name)?;

    let password_hash = credentials::hash_password(payload.password).await?;
    let rep = ClubRep {
        id: Uuid::new_v4(),
        college_id: session.identity_id,
        name: payload.name,
        email: normalize_email(&payload.email),
        password_hash,
        club_name: payload.club_name,
        phone_number: payload.phone_number,
        created_at: Utc::now(),
    };
    let created = state.repo.create_club_rep(rep).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_club_rep
#[utoipa::path(
    post,
    path = "/college/dashboard/delete-club-rep/{id}",
    params(("id" = Uuid, Path, description = "Club rep ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_club_rep(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::College)?;

    match state.repo.find_club_rep_by_id(id).await? {
        None => {
            tracing::info!(%id, "delete of missing club rep treated as success");
        }
        Some(rep) => {
            authorize_owner(
                &session,
                Resource::ClubRep,
                &Ownership {
                    college_id: Some(rep.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_club_rep(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- Teacher Dashboard ---

/// get_teacher_dashboard
///
/// [Teacher Route] The teacher's own records: assignments and circulars
/// newest-first, exams soonest-first.
#[utoipa::path(
    get,
    path = "/teacher/dashboard",
    responses((status = 200, description = "Dashboard", body = TeacherDashboard))
)]
pub async fn get_teacher_dashboard(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<TeacherDashboard>, PortalError> {
    require_role(&session, Role::Teacher)?;
    Ok(Json(
        dashboard::teacher_dashboard(state.repo.as_ref(), session.identity_id).await?,
    ))
}

/// add_assignment
///
/// [Teacher Route] Publishes an assignment owned by the authenticated
/// teacher; the owning college is denormalized from the session.
#[utoipa::path(
    post,
    path = "/teacher/dashboard/add-assignment",
    request_body = AddAssignmentRequest,
    responses((status = 201, description = "Created", body = Assignment))
)]
pub async fn add_assignment(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddAssignmentRequest>,
) -> Result<(StatusCode, Json<Assignment>), PortalError> {
    require_role(&session, Role::Teacher)?;
    require_field("title", &payload.title)?;
    require_field("description", &payload.description)?;
    require_field("subject", &payload.subject)?;

    let college_id = session.college_id.ok_or(PortalError::Unauthenticated)?;
    let assignment = Assignment {
        id: Uuid::new_v4(),
        teacher_id: session.identity_id,
        college_id,
        title: payload.title,
        description: payload.description,
        due_date: payload.due_date,
        subject: payload.subject,
        attachment_url: payload.attachment_url,
        created_at: Utc::now(),
    };
    let created = state.repo.create_assignment(assignment).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_assignment
///
/// [Teacher Route] Removes an assignment this teacher created. Another
/// teacher's assignment is refused with the uniform unauthorized response.
#[utoipa::path(
    post,
    path = "/teacher/dashboard/delete-assignment/{id}",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_assignment(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::Teacher)?;

    match state.repo.find_assignment(id).await? {
        None => {
            tracing::info!(%id, "delete of missing assignment treated as success");
        }
        Some(assignment) => {
            authorize_owner(
                &session,
                Resource::Assignment,
                &Ownership {
                    teacher_id: Some(assignment.teacher_id),
                    college_id: Some(assignment.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_assignment(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// add_circular
#[utoipa::path(
    post,
    path = "/teacher/dashboard/add-circular",
    request_body = AddCircularRequest,
    responses((status = 201, description = "Created", body = Circular))
)]
pub async fn add_circular(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddCircularRequest>,
) -> Result<(StatusCode, Json<Circular>), PortalError> {
    require_role(&session, Role::Teacher)?;
    require_field("title", &payload.title)?;
    require_field("content", &payload.content)?;

    let college_id = session.college_id.ok_or(PortalError::Unauthenticated)?;
    let circular = Circular {
        id: Uuid::new_v4(),
        teacher_id: session.identity_id,
        college_id,
        title: payload.title,
        content: payload.content,
        priority: payload.priority,
        attachment_url: payload.attachment_url,
        created_at: Utc::now(),
    };
    let created = state.repo.create_circular(circular).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_circular
#[utoipa::path(
    post,
    path = "/teacher/dashboard/delete-circular/{id}",
    params(("id" = Uuid, Path, description = "Circular ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_circular(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::Teacher)?;

    match state.repo.find_circular(id).await? {
        None => {
            tracing::info!(%id, "delete of missing circular treated as success");
        }
        Some(circular) => {
            authorize_owner(
                &session,
                Resource::Circular,
                &Ownership {
                    teacher_id: Some(circular.teacher_id),
                    college_id: Some(circular.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_circular(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// add_exam
#[utoipa::path(
    post,
    path = "/teacher/dashboard/add-exam",
    request_body = AddExamRequest,
    responses((status = 201, description = "Created", body = ExamSchedule))
)]
pub async fn add_exam(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddExamRequest>,
) -> Result<(StatusCode, Json<ExamSchedule>), PortalError> {
    require_role(&session, Role::Teacher)?;
    require_field("subject", &payload.subject)?;
    require_field("exam_time", &payload.exam_time)?;
    require_field("location", &payload.location)?;
    require_field("duration", &payload.duration)?;

    let college_id = session.college_id.ok_or(PortalError::Unauthenticated)?;
    let exam = ExamSchedule {
        id: Uuid::new_v4(),
        teacher_id: session.identity_id,
        college_id,
        subject: payload.subject,
        exam_date: payload.exam_date,
        exam_time: payload.exam_time,
        location: payload.location,
        exam_type: payload.exam_type,
        total_marks: payload.total_marks,
        duration: payload.duration,
        description: payload.description,
        created_at: Utc::now(),
    };
    let created = state.repo.create_exam(exam).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_exam
#[utoipa::path(
    post,
    path = "/teacher/dashboard/delete-exam/{id}",
    params(("id" = Uuid, Path, description = "Exam ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_exam(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::Teacher)?;

    match state.repo.find_exam(id).await? {
        None => {
            tracing::info!(%id, "delete of missing exam treated as success");
        }
        Some(exam) => {
            authorize_owner(
                &session,
                Resource::ExamSchedule,
                &Ownership {
                    teacher_id: Some(exam.teacher_id),
                    college_id: Some(exam.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_exam(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- Student Dashboard ---

/// get_student_dashboard
///
/// [Student Route] Read-only college-wide view. Students perform no
/// mutations; the policy table grants them none.
#[utoipa::path(
    get,
    path = "/student/dashboard",
    responses((status = 200, description = "Dashboard", body = StudentDashboard))
)]
pub async fn get_student_dashboard(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<StudentDashboard>, PortalError> {
    require_role(&session, Role::Student)?;
    let college_id = session.college_id.ok_or(PortalError::Unauthenticated)?;
    Ok(Json(
        dashboard::student_dashboard(state.repo.as_ref(), college_id).await?,
    ))
}

// --- Club Rep Dashboard ---

/// get_club_rep_dashboard
#[utoipa::path(
    get,
    path = "/club-rep/dashboard",
    responses((status = 200, description = "Dashboard", body = ClubRepDashboard))
)]
pub async fn get_club_rep_dashboard(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
) -> Result<Json<ClubRepDashboard>, PortalError> {
    require_role(&session, Role::ClubRep)?;
    Ok(Json(
        dashboard::club_rep_dashboard(state.repo.as_ref(), session.identity_id).await?,
    ))
}

/// add_announcement
#[utoipa::path(
    post,
    path = "/club-rep/dashboard/add-announcement",
    request_body = AddAnnouncementRequest,
    responses((status = 201, description = "Created", body = ClubAnnouncement))
)]
pub async fn add_announcement(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddAnnouncementRequest>,
) -> Result<(StatusCode, Json<ClubAnnouncement>), PortalError> {
    require_role(&session, Role::ClubRep)?;
    require_field("title", &payload.title)?;
    require_field("content", &payload.content)?;

    let college_id = session.college_id.ok_or(PortalError::Unauthenticated)?;
    let announcement = ClubAnnouncement {
        id: Uuid::new_v4(),
        club_rep_id: session.identity_id,
        college_id,
        title: payload.title,
        content: payload.content,
        category: payload.category,
        is_pinned: payload.is_pinned,
        created_at: Utc::now(),
    };
    let created = state.repo.create_announcement(announcement).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_announcement
#[utoipa::path(
    post,
    path = "/club-rep/dashboard/delete-announcement/{id}",
    params(("id" = Uuid, Path, description = "Announcement ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_announcement(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::ClubRep)?;

    match state.repo.find_announcement(id).await? {
        None => {
            tracing::info!(%id, "delete of missing announcement treated as success");
        }
        Some(announcement) => {
            authorize_owner(
                &session,
                Resource::ClubAnnouncement,
                &Ownership {
                    club_rep_id: Some(announcement.club_rep_id),
                    college_id: Some(announcement.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_announcement(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// add_club_member
#[utoipa::path(
    post,
    path = "/club-rep/dashboard/add-member",
    request_body = AddClubMemberRequest,
    responses((status = 201, description = "Created", body = ClubMember))
)]
pub async fn add_club_member(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddClubMemberRequest>,
) -> Result<(StatusCode, Json<ClubMember>), PortalError> {
    require_role(&session, Role::ClubRep)?;
    require_field("name", &payload.name)?;
    require_field("email", &payload.email)?;

    let college_id = session.college_id.ok_or(PortalError::Unauthenticated)?;
    let member = ClubMember {
        id: Uuid::new_v4(),
        club_rep_id: session.identity_id,
        college_id,
        name: payload.name,
        email: normalize_email(&payload.email),
        phone_number: payload.phone_number,
        roll_number: payload.roll_number,
        department: payload.department,
        member_role: payload.member_role,
        status: payload.status,
        created_at: Utc::now(),
    };
    let created = state.repo.create_club_member(member).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_club_member
#[utoipa::path(
    post,
    path = "/club-rep/dashboard/delete-member/{id}",
    params(("id" = Uuid, Path, description = "Member ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_club_member(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::ClubRep)?;

    match state.repo.find_club_member(id).await? {
        None => {
            tracing::info!(%id, "delete of missing club member treated as success");
        }
        Some(member) => {
            authorize_owner(
                &session,
                Resource::ClubMember,
                &Ownership {
                    club_rep_id: Some(member.club_rep_id),
                    college_id: Some(member.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_club_member(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// add_event
#[utoipa::path(
    post,
    path = "/club-rep/dashboard/add-event",
    request_body = AddEventRequest,
    responses((status = 201, description = "Created", body = Event))
)]
pub async fn add_event(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Json(payload): Json<AddEventRequest>,
) -> Result<(StatusCode, Json<Event>), PortalError> {
    require_role(&session, Role::ClubRep)?;
    require_field("event_name", &payload.event_name)?;
    require_field("description", &payload.description)?;
    require_field("event_time", &payload.event_time)?;
    require_field("location", &payload.location)?;

    let college_id = session.college_id.ok_or(PortalError::Unauthenticated)?;
    let event = Event {
        id: Uuid::new_v4(),
        club_rep_id: session.identity_id,
        college_id,
        event_name: payload.event_name,
        description: payload.description,
        event_date: payload.event_date,
        event_time: payload.event_time,
        location: payload.location,
        capacity: payload.capacity,
        registered_count: 0,
        event_type: payload.event_type,
        status: EventStatus::Upcoming,
        image_url: payload.image_url,
        created_at: Utc::now(),
    };
    let created = state.repo.create_event(event).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// delete_event
#[utoipa::path(
    post,
    path = "/club-rep/dashboard/delete-event/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses((status = 204, description = "Deleted"))
)]
pub async fn delete_event(
    SessionUser { session, .. }: SessionUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PortalError> {
    require_role(&session, Role::ClubRep)?;

    match state.repo.find_event(id).await? {
        None => {
            tracing::info!(%id, "delete of missing event treated as success");
        }
        Some(event) => {
            authorize_owner(
                &session,
                Resource::Event,
                &Ownership {
                    club_rep_id: Some(event.club_rep_id),
                    college_id: Some(event.college_id),
                    ..Ownership::default()
                },
            )?;
            state.repo.delete_event(id).await?;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}
