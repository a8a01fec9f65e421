//! String-backed enumerations shared by the entity models.
//!
//! Every enum is stored as its snake_case string value and serialized the same way, so the
//! database, JSON bodies and validation rules all agree on one spelling. `VALUES` lists the
//! accepted strings in declaration order for use in allow-list validation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:tt),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
        )]
        #[sea_orm(rs_type = "String", db_type = "Text")]
        pub enum $name {
            $(
                #[sea_orm(string_value = $value)]
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Accepted string values in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// The stored string value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Parses a stored string value, returning `None` for anything unknown.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Account role, checked on every protected endpoint.
    Role {
        Adopter => "adopter",
        Staff => "staff",
        Admin => "admin",
        Vet => "vet",
        Volunteer => "volunteer",
        Foster => "foster",
    }
}

string_enum! {
    PetStatus {
        Available => "available",
        Pending => "pending",
        Adopted => "adopted",
        Fostered => "fostered",
        MedicalHold => "medical_hold",
    }
}

string_enum! {
    PetGender {
        Male => "male",
        Female => "female",
        Unknown => "unknown",
    }
}

string_enum! {
    ApplicationStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

string_enum! {
    FosterStatus {
        Pending => "pending",
        Approved => "approved",
        Active => "active",
        Completed => "completed",
        Rejected => "rejected",
        Cancelled => "cancelled",
    }
}

string_enum! {
    MedicalRecordType {
        Vaccination => "vaccination",
        Checkup => "checkup",
        Surgery => "surgery",
        Medication => "medication",
        Other => "other",
    }
}

string_enum! {
    AppointmentType {
        MeetGreet => "meet_greet",
        AdoptionFinalization => "adoption_finalization",
        MedicalCheckup => "medical_checkup",
        BehavioralAssessment => "behavioral_assessment",
        HomeVisit => "home_visit",
    }
}

string_enum! {
    AppointmentStatus {
        Scheduled => "scheduled",
        Confirmed => "confirmed",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
        NoShow => "no_show",
    }
}

string_enum! {
    SupplyCategory {
        Food => "food",
        Medical => "medical",
        Toys => "toys",
        Bedding => "bedding",
        Cleaning => "cleaning",
        Other => "other",
    }
}

string_enum! {
    SupplyUrgency {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

string_enum! {
    SupplyStatus {
        Pending => "pending",
        Approved => "approved",
        Ordered => "ordered",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
}

string_enum! {
    VolunteerApplicationType {
        AnimalCare => "animal_care",
        EventSupport => "event_support",
        Administrative => "administrative",
        Transportation => "transportation",
        Other => "other",
    }
}

string_enum! {
    VolunteerApplicationStatus {
        Pending => "pending",
        UnderReview => "under_review",
        InterviewScheduled => "interview_scheduled",
        Approved => "approved",
        Rejected => "rejected",
    }
}

string_enum! {
    TaskUrgency {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

string_enum! {
    TaskStatus {
        Open => "open",
        Assigned => "assigned",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

string_enum! {
    TrainingDifficulty {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

string_enum! {
    TrainingCategory {
        General => "general",
        AnimalCare => "animal_care",
        CustomerService => "customer_service",
        Safety => "safety",
        Administrative => "administrative",
    }
}

string_enum! {
    TrainingStatus {
        NotStarted => "not_started",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

string_enum! {
    NotificationType {
        NewAppointment => "new_appointment",
        AppointmentUpdate => "appointment_update",
        ApplicationUpdate => "application_update",
        FosterUpdate => "foster_update",
        SupplyRequest => "supply_request",
        SupplyUpdate => "supply_update",
        VolunteerApplicationUpdate => "volunteer_application_update",
        General => "general",
    }
}

impl NotificationType {
    /// Human readable label, e.g. `new_appointment` becomes `New Appointment`.
    pub fn display(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
