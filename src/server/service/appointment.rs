use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{AppointmentStatus, AppointmentType, NotificationType};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::appointment::AppointmentDto,
    server::{
        data::{
            appointment::{AppointmentRepository, NewAppointment},
            notification::NewNotification,
            pet::PetRepository,
            shelter::ShelterRepository,
        },
        error::Error,
        model::auth::{AuthUser, REPORT_ROLES},
        service::notification::notify_staff,
    },
};

/// Appointment booking request.
pub struct AppointmentRequest {
    pub appointment_type: AppointmentType,
    pub appointment_datetime: NaiveDateTime,
    pub pet_id: Option<i32>,
    pub shelter_id: Option<i32>,
    pub notes: Option<String>,
}

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    /// Creates a new instance of [`AppointmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an appointment for `user_id` and notifies staff and admins.
    ///
    /// When only a pet is given, the appointment takes place at the pet's shelter.
    ///
    /// # Returns
    /// - `Ok(AppointmentDto)`: The scheduled appointment
    /// - `Err(Error::BadRequest)`: The date and time are not in the future
    /// - `Err(Error::NotFound)`: The pet or shelter does not exist
    /// - `Err(Error::Conflict)`: The user already has an appointment at that time
    pub async fn create(
        &self,
        user_id: i32,
        request: AppointmentRequest,
    ) -> Result<AppointmentDto, Error> {
        if request.appointment_datetime <= chrono::Utc::now().naive_utc() {
            return Err(Error::BadRequest(
                "Appointment must be scheduled for a future date and time".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let mut shelter_id = request.shelter_id;
        if let Some(pet_id) = request.pet_id {
            let pet = PetRepository::new(&txn)
                .get(pet_id)
                .await?
                .ok_or_else(|| Error::not_found("Pet"))?;

            shelter_id = shelter_id.or(pet.shelter_id);
        }
        if let Some(shelter_id) = shelter_id {
            ShelterRepository::new(&txn)
                .get(shelter_id)
                .await?
                .ok_or_else(|| Error::not_found("Shelter"))?;
        }

        let appointment_repo = AppointmentRepository::new(&txn);
        if appointment_repo
            .has_conflict(user_id, request.appointment_datetime)
            .await?
        {
            return Err(Error::Conflict(
                "You already have an appointment scheduled at this time".to_string(),
            ));
        }

        let appointment = appointment_repo
            .create(NewAppointment {
                user_id,
                pet_id: request.pet_id,
                shelter_id,
                appointment_type: request.appointment_type,
                appointment_datetime: request.appointment_datetime,
                notes: request.notes,
            })
            .await?;

        notify_staff(
            &txn,
            NewNotification {
                notification_type: NotificationType::NewAppointment,
                title: "New Appointment Scheduled".to_string(),
                message: format!(
                    "A new {} appointment has been scheduled for {}",
                    appointment.appointment_type.as_str().replace('_', " "),
                    appointment.appointment_datetime.format("%Y-%m-%d %H:%M")
                ),
            },
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            appointment_id = appointment.id,
            user_id,
            "Scheduled {} appointment",
            appointment.appointment_type
        );

        Ok(AppointmentDto::from(appointment))
    }

    /// Appointments soonest first; staff, admins and vets see everyone's.
    pub async fn list(
        &self,
        viewer: &AuthUser,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<AppointmentDto>, Error> {
        let user_id = (!viewer.is_any(REPORT_ROLES)).then_some(viewer.id);

        let appointments = AppointmentRepository::new(self.db)
            .list(user_id, status)
            .await?;

        Ok(appointments.into_iter().map(AppointmentDto::from).collect())
    }
}
