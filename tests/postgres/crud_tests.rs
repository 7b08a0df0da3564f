//! CRUD tests for the `PostgreSQL` task repository.

use chrono::{TimeZone, Utc};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::rstest;
use taskdesk::task::{
    adapters::postgres::apply_schema,
    domain::{ReferenceTimezone, TaskDetails, TaskId, TaskOrder},
    ports::{TaskRepository, TaskRepositoryError},
};

use super::cluster::BoxError;
use super::helpers::{TaskDbContext, task_db};
use crate::test_helpers::clock::{FixedClock, saturday_afternoon};

#[rstest]
fn create_assigns_identifier_and_starts_incomplete(
    task_db: Result<TaskDbContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = task_db?;
    ctx.rt.block_on(async {
        let first = ctx.repo.create(&TaskDetails::new("Wash car", "Use soap")).await?;
        let second = ctx.repo.create(&TaskDetails::new("Mop", "")).await?;
        let found = ctx
            .repo
            .find_by_id(first.id())
            .await?
            .ok_or("created task not found")?;

        assert_eq!(found, first);
        assert_eq!(found.title(), "Wash car");
        assert_eq!(found.description(), "Use soap");
        assert!(!found.is_complete());
        assert!(second.id() > first.id());
        Ok(())
    })
}

#[rstest]
fn completion_is_loaded_in_reference_timezone(
    task_db: Result<TaskDbContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = task_db?;
    ctx.rt.block_on(async {
        let mut task = ctx.repo.create(&TaskDetails::new("Wash car", "")).await?;
        let clock = saturday_afternoon();
        task.mark_complete(ReferenceTimezone::default(), &clock);

        ctx.repo.update(&task).await?;
        let stored = ctx
            .repo
            .find_by_id(task.id())
            .await?
            .ok_or("updated task not found")?;

        let stamp = stored.completed_at().ok_or("completion not persisted")?;
        assert_eq!(stamp.with_timezone(&Utc), clock.0);
        assert_eq!(stamp.timezone(), ReferenceTimezone::default().tz());
        assert_eq!(stamp.format("%I:%M%p").to_string(), "03:45PM");
        Ok(())
    })
}

#[rstest]
fn reopening_clears_the_stored_completion(
    task_db: Result<TaskDbContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = task_db?;
    ctx.rt.block_on(async {
        let mut task = ctx.repo.create(&TaskDetails::new("Dust", "")).await?;
        let completed_at = Utc
            .with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
            .single()
            .ok_or("invalid instant")?;
        task.mark_complete(ReferenceTimezone::default(), &FixedClock(completed_at));
        ctx.repo.update(&task).await?;

        task.mark_incomplete();
        ctx.repo.update(&task).await?;
        let reopened = ctx
            .repo
            .find_by_id(task.id())
            .await?
            .ok_or("reopened task not found")?;

        assert!(!reopened.is_complete());
        assert!(reopened.completed_at().is_none());
        Ok(())
    })
}

#[rstest]
fn update_rewrites_title_and_description(
    task_db: Result<TaskDbContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = task_db?;
    ctx.rt.block_on(async {
        let mut task = ctx.repo.create(&TaskDetails::new("Wash car", "Use soap")).await?;
        task.revise(TaskDetails::new("Wash van", ""));

        ctx.repo.update(&task).await?;
        let stored = ctx
            .repo
            .find_by_id(task.id())
            .await?
            .ok_or("updated task not found")?;

        assert_eq!(stored.title(), "Wash van");
        assert_eq!(stored.description(), "");
        Ok(())
    })
}

#[rstest]
fn delete_removes_row_and_reports_missing_rows(
    task_db: Result<TaskDbContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = task_db?;
    ctx.rt.block_on(async {
        let task = ctx.repo.create(&TaskDetails::new("Vacuum", "")).await?;

        ctx.repo.delete(task.id()).await?;

        assert!(ctx.repo.find_by_id(task.id()).await?.is_none());
        assert!(ctx.repo.list(TaskOrder::Unordered).await?.is_empty());
        assert!(matches!(
            ctx.repo.delete(task.id()).await,
            Err(TaskRepositoryError::NotFound(id)) if id == task.id()
        ));
        Ok(())
    })
}

#[rstest]
fn update_of_missing_row_is_not_found(
    task_db: Result<TaskDbContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = task_db?;
    ctx.rt.block_on(async {
        let task = ctx.repo.create(&TaskDetails::new("Ghost", "")).await?;
        ctx.repo.delete(task.id()).await?;

        let result = ctx.repo.update(&task).await;

        assert!(matches!(
            result,
            Err(TaskRepositoryError::NotFound(id)) if id == task.id()
        ));
        assert!(ctx.repo.find_by_id(TaskId::new(i64::MAX)).await?.is_none());
        Ok(())
    })
}

#[rstest]
fn applying_the_schema_twice_keeps_existing_rows(
    task_db: Result<TaskDbContext, BoxError>,
) -> Result<(), BoxError> {
    let ctx = task_db?;
    let manager = ConnectionManager::<PgConnection>::new(ctx.database_url());
    let pool = Pool::builder().max_size(1).build(manager)?;
    ctx.rt.block_on(async {
        let task = ctx.repo.create(&TaskDetails::new("Wash car", "")).await?;

        apply_schema(&pool).await?;

        assert!(ctx.repo.find_by_id(task.id()).await?.is_some());
        Ok(())
    })
}
