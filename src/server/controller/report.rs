use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        report::DashboardStatsDto,
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthUser, REPORT_ROLES},
        },
        service::report::ReportService,
    },
};

pub static REPORT_TAG: &str = "reports";

/// Dashboard counts across the shelter's records
///
/// The medical summary is only included for vets and admins.
#[utoipa::path(
    get,
    path = "/api/reports/dashboard",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardStatsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff, admin or vet only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    user.require_any(REPORT_ROLES)?;

    let stats = ReportService::new(&state.db).dashboard(&user).await?;

    Ok(ApiResponse::ok("Dashboard statistics retrieved", stats))
}
