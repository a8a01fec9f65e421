use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::{
    TaskStatus, TaskUrgency, VolunteerApplicationStatus, VolunteerApplicationType,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        volunteer::{
            AssignTaskDto, CreateVolunteerApplicationDto, CreateVolunteerTaskDto,
            UpdateVolunteerApplicationStatusDto, VolunteerApplicationDto, VolunteerTaskDto,
        },
    },
    server::{
        data::{
            volunteer_application::NewVolunteerApplication, volunteer_task::NewVolunteerTask,
        },
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, STAFF_ROLES, VOLUNTEER_ROLES},
        },
        service::{
            transition::{volunteer::TaskAction, TransitionService},
            volunteer::VolunteerService,
        },
        validation::{Input, Query, Rule, Schema},
    },
};

pub static VOLUNTEER_TAG: &str = "volunteers";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VolunteerApplicationListParams {
    #[param(value_type = Option<String>)]
    pub status: Option<VolunteerApplicationStatus>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskListParams {
    #[param(value_type = Option<String>)]
    pub status: Option<TaskStatus>,
}

/// Applies to volunteer at the shelter
///
/// Users with an open or approved application cannot apply again.
#[utoipa::path(
    post,
    path = "/api/volunteer-applications",
    tag = VOLUNTEER_TAG,
    request_body = CreateVolunteerApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApiResponse<VolunteerApplicationDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Existing application blocks a new one", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_volunteer_application(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    Schema::new()
        .field(
            "application_type",
            [Rule::Required, Rule::In(VolunteerApplicationType::VALUES)],
        )
        .field("availability", [Rule::Required, Rule::String])
        .field("motivation", [Rule::Required, Rule::String])
        .field(
            "emergency_contact_name",
            [Rule::Required, Rule::String, Rule::Max(100)],
        )
        .field("emergency_contact_phone", [Rule::Required, Rule::Phone])
        .field("experience", [Rule::String])
        .field("skills", [Rule::String])
        .validate(&input)?;

    let application = NewVolunteerApplication {
        user_id: user.id,
        application_type: input
            .require_with("application_type", VolunteerApplicationType::parse)?,
        availability: input.string("availability")?,
        experience: input.opt_string("experience"),
        skills: input.opt_string("skills"),
        motivation: input.string("motivation")?,
        emergency_contact_name: input.string("emergency_contact_name")?,
        emergency_contact_phone: input.string("emergency_contact_phone")?,
    };

    let application = VolunteerService::new(&state.db).apply(application).await?;

    Ok(ApiResponse::created(
        "Volunteer application submitted successfully",
        application,
    ))
}

#[utoipa::path(
    get,
    path = "/api/volunteer-applications/mine",
    tag = VOLUNTEER_TAG,
    responses(
        (status = 200, description = "Volunteer applications", body = ApiResponse<Vec<VolunteerApplicationDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_volunteer_applications(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let applications = VolunteerService::new(&state.db)
        .list_applications(Some(user.id), None)
        .await?;

    Ok(ApiResponse::ok("Volunteer applications retrieved", applications))
}

#[utoipa::path(
    get,
    path = "/api/volunteer-applications",
    tag = VOLUNTEER_TAG,
    params(VolunteerApplicationListParams),
    responses(
        (status = 200, description = "Volunteer applications", body = ApiResponse<Vec<VolunteerApplicationDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_volunteer_applications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<VolunteerApplicationListParams>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    let applications = VolunteerService::new(&state.db)
        .list_applications(None, params.status)
        .await?;

    Ok(ApiResponse::ok("Volunteer applications retrieved", applications))
}

/// Reviews a volunteer application
///
/// Approving an adopter's application makes them a volunteer.
#[utoipa::path(
    put,
    path = "/api/volunteer-applications/{id}/status",
    tag = VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Volunteer application ID")),
    request_body = UpdateVolunteerApplicationStatusDto,
    responses(
        (status = 200, description = "Application updated", body = ApiResponse<VolunteerApplicationDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 404, description = "Volunteer application not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_volunteer_application_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(application_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    Schema::new()
        .field(
            "status",
            [Rule::Required, Rule::In(VolunteerApplicationStatus::VALUES)],
        )
        .field("notes", [Rule::String])
        .validate(&input)?;
    let status = input.require_with("status", VolunteerApplicationStatus::parse)?;

    let application = TransitionService::new(&state.db)
        .review_volunteer_application(application_id, status, input.opt_string("notes"), &user)
        .await?;

    Ok(ApiResponse::ok(
        "Volunteer application status updated successfully",
        application,
    ))
}

#[utoipa::path(
    post,
    path = "/api/volunteer-tasks",
    tag = VOLUNTEER_TAG,
    request_body = CreateVolunteerTaskDto,
    responses(
        (status = 201, description = "Task created", body = ApiResponse<VolunteerTaskDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_volunteer_task(
    State(state): State<AppState>,
    user: AuthUser,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    Schema::new()
        .field("title", [Rule::Required, Rule::String, Rule::Max(255)])
        .field("description", [Rule::String])
        .field("shelter_id", [Rule::Integer])
        .field("required_skills", [Rule::String])
        .field("urgency", [Rule::In(TaskUrgency::VALUES)])
        .field("task_date", [Rule::DateTime])
        .field("status", [Rule::In(TaskStatus::VALUES)])
        .validate(&input)?;

    let task = NewVolunteerTask {
        title: input.string("title")?,
        description: input.opt_string("description"),
        shelter_id: input.id("shelter_id"),
        required_skills: input.opt_string("required_skills"),
        urgency: input
            .parse_with("urgency", TaskUrgency::parse)
            .unwrap_or(TaskUrgency::Medium),
        task_date: input.datetime("task_date"),
        status: input
            .parse_with("status", TaskStatus::parse)
            .unwrap_or(TaskStatus::Open),
        created_by: user.id,
    };

    let task = VolunteerService::new(&state.db).create_task(task).await?;

    Ok(ApiResponse::created("Volunteer task created successfully", task))
}

/// Lists volunteer tasks ordered by date
#[utoipa::path(
    get,
    path = "/api/volunteer-tasks",
    tag = VOLUNTEER_TAG,
    params(TaskListParams),
    responses(
        (status = 200, description = "Volunteer tasks", body = ApiResponse<Vec<VolunteerTaskDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_volunteer_tasks(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<TaskListParams>,
) -> Result<impl IntoResponse, Error> {
    let tasks = VolunteerService::new(&state.db)
        .list_tasks(None, params.status)
        .await?;

    Ok(ApiResponse::ok("Volunteer tasks retrieved", tasks))
}

/// Lists tasks assigned to the logged in user
#[utoipa::path(
    get,
    path = "/api/volunteer-tasks/mine",
    tag = VOLUNTEER_TAG,
    responses(
        (status = 200, description = "Assigned tasks", body = ApiResponse<Vec<VolunteerTaskDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_volunteer_tasks(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let tasks = VolunteerService::new(&state.db)
        .list_tasks(Some(user.id), None)
        .await?;

    Ok(ApiResponse::ok("Volunteer tasks retrieved", tasks))
}

/// Assigns an open task
///
/// `volunteer_id` defaults to the caller; only staff and admins may assign someone else.
#[utoipa::path(
    put,
    path = "/api/volunteer-tasks/{id}/assign",
    tag = VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Volunteer task ID")),
    request_body = AssignTaskDto,
    responses(
        (status = 200, description = "Task assigned", body = ApiResponse<VolunteerTaskDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Not allowed to assign this task", body = ErrorDto),
        (status = 404, description = "Task or volunteer not found", body = ErrorDto),
        (status = 409, description = "Task is not open", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_volunteer_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(task_id): Path<i32>,
    input: Input,
) -> Result<impl IntoResponse, Error> {
    user.require_any(VOLUNTEER_ROLES)?;

    Schema::new()
        .field("volunteer_id", [Rule::Integer])
        .validate(&input)?;
    let volunteer_id = input.id("volunteer_id").unwrap_or(user.id);

    let task = TransitionService::new(&state.db)
        .act_on_task(task_id, TaskAction::Assign(volunteer_id), &user)
        .await?;

    Ok(ApiResponse::ok("Task assigned successfully", task))
}

#[utoipa::path(
    put,
    path = "/api/volunteer-tasks/{id}/start",
    tag = VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Volunteer task ID")),
    responses(
        (status = 200, description = "Task started", body = ApiResponse<VolunteerTaskDto>),
        (status = 403, description = "Not the assignee", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 409, description = "Task is not assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_volunteer_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let task = TransitionService::new(&state.db)
        .act_on_task(task_id, TaskAction::Start, &user)
        .await?;

    Ok(ApiResponse::ok("Task started", task))
}

#[utoipa::path(
    put,
    path = "/api/volunteer-tasks/{id}/complete",
    tag = VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Volunteer task ID")),
    responses(
        (status = 200, description = "Task completed", body = ApiResponse<VolunteerTaskDto>),
        (status = 403, description = "Not the assignee", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 409, description = "Task is not assigned or in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_volunteer_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let task = TransitionService::new(&state.db)
        .act_on_task(task_id, TaskAction::Complete, &user)
        .await?;

    Ok(ApiResponse::ok("Task completed", task))
}

#[utoipa::path(
    put,
    path = "/api/volunteer-tasks/{id}/cancel",
    tag = VOLUNTEER_TAG,
    params(("id" = i32, Path, description = "Volunteer task ID")),
    responses(
        (status = 200, description = "Task cancelled", body = ApiResponse<VolunteerTaskDto>),
        (status = 403, description = "Staff or admin only", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 409, description = "Task already finished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_volunteer_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any(STAFF_ROLES)?;

    let task = TransitionService::new(&state.db)
        .act_on_task(task_id, TaskAction::Cancel, &user)
        .await?;

    Ok(ApiResponse::ok("Task cancelled", task))
}
