//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint together with its OpenAPI document and
//! serves Swagger UI at `/api/docs`. Unknown paths and unsupported methods answer with the
//! same JSON error envelope as the handlers.

use axum::{http::StatusCode, response::Response, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "PawHaven", description = "Pet adoption shelter management API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Registration and session login"),
            (name = controller::user::USER_TAG, description = "Profiles and account administration"),
            (name = controller::shelter::SHELTER_TAG, description = "Shelter locations"),
            (name = controller::pet::PET_TAG, description = "Pets and their availability"),
            (name = controller::application::APPLICATION_TAG, description = "Adoption applications"),
            (name = controller::foster::FOSTER_TAG, description = "Foster placements"),
            (name = controller::medical::MEDICAL_TAG, description = "Medical records"),
            (name = controller::appointment::APPOINTMENT_TAG, description = "Visits and appointments"),
            (name = controller::favorite::FAVORITE_TAG, description = "Favorite pets"),
            (name = controller::notification::NOTIFICATION_TAG, description = "In-app notifications"),
            (name = controller::supply::SUPPLY_TAG, description = "Supply requests from foster parents"),
            (name = controller::volunteer::VOLUNTEER_TAG, description = "Volunteer applications and tasks"),
            (name = controller::training::TRAINING_TAG, description = "Volunteer training modules"),
            (name = controller::report::REPORT_TAG, description = "Dashboard statistics"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::list_users))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(controller::user::get_stats))
        .routes(routes!(controller::user::update_role))
        .routes(routes!(controller::user::delete_user))
        .routes(routes!(
            controller::shelter::list_shelters,
            controller::shelter::create_shelter
        ))
        .routes(routes!(
            controller::shelter::get_shelter,
            controller::shelter::update_shelter,
            controller::shelter::delete_shelter
        ))
        .routes(routes!(controller::pet::list_pets, controller::pet::create_pet))
        .routes(routes!(controller::pet::list_available_pets))
        .routes(routes!(
            controller::pet::get_pet,
            controller::pet::update_pet,
            controller::pet::delete_pet
        ))
        .routes(routes!(controller::pet::list_pet_medical_records))
        .routes(routes!(
            controller::application::list_applications,
            controller::application::create_application
        ))
        .routes(routes!(controller::application::list_my_applications))
        .routes(routes!(controller::application::update_application_status))
        .routes(routes!(
            controller::foster::list_foster_records,
            controller::foster::create_foster_record
        ))
        .routes(routes!(controller::foster::list_my_foster_records))
        .routes(routes!(controller::foster::update_foster_status))
        .routes(routes!(controller::medical::create_medical_record))
        .routes(routes!(
            controller::medical::update_medical_record,
            controller::medical::delete_medical_record
        ))
        .routes(routes!(
            controller::appointment::list_appointments,
            controller::appointment::create_appointment
        ))
        .routes(routes!(controller::appointment::update_appointment_status))
        .routes(routes!(
            controller::favorite::list_favorites,
            controller::favorite::add_favorite
        ))
        .routes(routes!(controller::favorite::remove_favorite))
        .routes(routes!(controller::notification::list_notifications))
        .routes(routes!(controller::notification::mark_notifications_read))
        .routes(routes!(
            controller::supply::list_supply_requests,
            controller::supply::create_supply_request
        ))
        .routes(routes!(controller::supply::update_supply_status))
        .routes(routes!(
            controller::volunteer::list_volunteer_applications,
            controller::volunteer::create_volunteer_application
        ))
        .routes(routes!(controller::volunteer::list_my_volunteer_applications))
        .routes(routes!(
            controller::volunteer::update_volunteer_application_status
        ))
        .routes(routes!(
            controller::volunteer::list_volunteer_tasks,
            controller::volunteer::create_volunteer_task
        ))
        .routes(routes!(controller::volunteer::list_my_volunteer_tasks))
        .routes(routes!(controller::volunteer::assign_volunteer_task))
        .routes(routes!(controller::volunteer::start_volunteer_task))
        .routes(routes!(controller::volunteer::complete_volunteer_task))
        .routes(routes!(controller::volunteer::cancel_volunteer_task))
        .routes(routes!(
            controller::training::list_training_modules,
            controller::training::create_training_module
        ))
        .routes(routes!(controller::training::update_training_progress))
        .routes(routes!(controller::report::get_dashboard))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn not_found() -> Response {
    ErrorDto::new("Endpoint not found").respond(StatusCode::NOT_FOUND)
}

async fn method_not_allowed() -> Response {
    ErrorDto::new("Method not allowed").respond(StatusCode::METHOD_NOT_ALLOWED)
}
