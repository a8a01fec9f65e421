use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{TaskStatus, TaskUrgency};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct NewVolunteerTask {
    pub title: String,
    pub description: Option<String>,
    pub shelter_id: Option<i32>,
    pub required_skills: Option<String>,
    pub urgency: TaskUrgency,
    pub task_date: Option<NaiveDateTime>,
    pub status: TaskStatus,
    pub created_by: i32,
}

pub struct VolunteerTaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VolunteerTaskRepository<'a, C> {
    /// Creates a new instance of [`VolunteerTaskRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        task: NewVolunteerTask,
    ) -> Result<entity::volunteer_tasks::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        entity::volunteer_tasks::ActiveModel {
            title: ActiveValue::Set(task.title),
            description: ActiveValue::Set(task.description),
            shelter_id: ActiveValue::Set(task.shelter_id),
            required_skills: ActiveValue::Set(task.required_skills),
            urgency: ActiveValue::Set(task.urgency),
            task_date: ActiveValue::Set(task.task_date),
            status: ActiveValue::Set(task.status),
            created_by: ActiveValue::Set(Some(task.created_by)),
            assigned_to: ActiveValue::Set(None),
            assigned_at: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, task_id: i32) -> Result<Option<entity::volunteer_tasks::Model>, DbErr> {
        entity::prelude::VolunteerTasks::find_by_id(task_id)
            .one(self.db)
            .await
    }

    /// Lists tasks by task date, optionally narrowed to one assignee.
    pub async fn list(
        &self,
        assigned_to: Option<i32>,
        status: Option<TaskStatus>,
    ) -> Result<Vec<entity::volunteer_tasks::Model>, DbErr> {
        let mut query = entity::prelude::VolunteerTasks::find();

        if let Some(assigned_to) = assigned_to {
            query = query.filter(entity::volunteer_tasks::Column::AssignedTo.eq(assigned_to));
        }
        if let Some(status) = status {
            query = query.filter(entity::volunteer_tasks::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::volunteer_tasks::Column::TaskDate)
            .order_by_desc(entity::volunteer_tasks::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn assign(
        &self,
        task: entity::volunteer_tasks::Model,
        user_id: i32,
    ) -> Result<entity::volunteer_tasks::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        let mut task_am = task.into_active_model();
        task_am.status = ActiveValue::Set(TaskStatus::Assigned);
        task_am.assigned_to = ActiveValue::Set(Some(user_id));
        task_am.assigned_at = ActiveValue::Set(Some(now));
        task_am.updated_at = ActiveValue::Set(now);

        task_am.update(self.db).await
    }

    /// Sets the status; completion stamps `completed_at`.
    pub async fn update_status(
        &self,
        task: entity::volunteer_tasks::Model,
        status: TaskStatus,
    ) -> Result<entity::volunteer_tasks::Model, DbErr> {
        let now = chrono::Utc::now().naive_utc();

        let mut task_am = task.into_active_model();
        task_am.status = ActiveValue::Set(status);
        if status == TaskStatus::Completed {
            task_am.completed_at = ActiveValue::Set(Some(now));
        }
        task_am.updated_at = ActiveValue::Set(now);

        task_am.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod assign {
        use entity::{
            prelude::*,
            sea_orm_active_enums::{Role, TaskStatus, TaskUrgency},
        };
        use pawhaven_test_utils::prelude::*;

        use crate::server::data::volunteer_task::{NewVolunteerTask, VolunteerTaskRepository};

        /// Expect assignment to set the assignee and appear in their task list
        #[tokio::test]
        async fn assigns_task_to_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_pet_tables()
                .with_table(VolunteerTasks)
                .build()
                .await?;
            let staff = test.user().insert_user_with_role("staff", Role::Staff).await?;
            let volunteer = test
                .user()
                .insert_user_with_role("volunteer", Role::Volunteer)
                .await?;

            let repo = VolunteerTaskRepository::new(&test.db);
            let task = repo
                .create(NewVolunteerTask {
                    title: "Walk the dogs".to_string(),
                    description: None,
                    shelter_id: None,
                    required_skills: None,
                    urgency: TaskUrgency::Medium,
                    task_date: None,
                    status: TaskStatus::Open,
                    created_by: staff.id,
                })
                .await?;

            let task = repo.assign(task, volunteer.id).await?;
            let mine = repo.list(Some(volunteer.id), None).await?;

            assert_eq!(task.status, TaskStatus::Assigned);
            assert!(task.assigned_at.is_some());
            assert_eq!(mine.len(), 1);

            Ok(())
        }
    }
}
