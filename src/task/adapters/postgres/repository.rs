//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, ReferenceTimezone, Task, TaskDetails, TaskId, TaskOrder},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema bootstrap applied by [`apply_schema`].
const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_tasks/up.sql");

/// Creates the `tasks` table when it does not exist yet.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when a connection cannot be
/// checked out or the DDL fails.
pub async fn apply_schema(pool: &TaskPgPool) -> TaskRepositoryResult<()> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(CREATE_TASKS_SQL)
            .map_err(TaskRepositoryError::persistence)
    })
    .await
    .map_err(TaskRepositoryError::persistence)?
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
    timezone: ReferenceTimezone,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    ///
    /// Completion timestamps are stored in UTC and expressed in `timezone`
    /// when loaded.
    #[must_use]
    pub const fn new(pool: TaskPgPool, timezone: ReferenceTimezone) -> Self {
        Self { pool, timezone }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, details: &TaskDetails) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            title: details.title().to_owned(),
            description: details.description().to_owned(),
        };
        let timezone = self.timezone;

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row_to_task(row, timezone))
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let timezone = self.timezone;
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(|found| row_to_task(found, timezone)))
        })
        .await
    }

    async fn list(&self, order: TaskOrder) -> TaskRepositoryResult<Vec<Task>> {
        let timezone = self.timezone;
        self.run_blocking(move |connection| {
            let query = tasks::table.select(TaskRow::as_select()).into_boxed();
            let ordered = match order {
                TaskOrder::Unordered => query,
                TaskOrder::TitleAscending => query.order(tasks::title.asc()),
                TaskOrder::TitleDescending => query.order(tasks::title.desc()),
            };
            let rows = ordered
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows
                .into_iter()
                .map(|row| row_to_task(row, timezone))
                .collect())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = TaskChangeset {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            completed_at: task.completed_at().map(|at| at.with_timezone(&Utc)),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow, timezone: ReferenceTimezone) -> Task {
    let TaskRow {
        id,
        title,
        description,
        completed_at,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        completed_at: completed_at.map(|at| timezone.localize(at)),
    })
}
