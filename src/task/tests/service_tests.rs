//! Service orchestration tests for the task lifecycle.

use std::sync::Arc;

use super::{future_due_date, principal};
use crate::auth::domain::Principal;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NotificationId, TaskDescription, TaskId, TaskStatus, TaskTitle},
    ports::TaskFilter,
    services::{CreateTaskRequest, TaskLifecycleService, TaskServiceError, UpdateTaskRequest},
};
use crate::user::{adapters::memory::InMemoryUserRepository, domain::UserProfile};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, InMemoryUserRepository, DefaultClock>;

struct Harness {
    service: TestService,
    alice: Principal,
    bob: Principal,
    carol: Principal,
}

#[fixture]
fn harness() -> Harness {
    let alice = principal("Alice");
    let bob = principal("Bob");
    let carol = principal("Carol");
    let users = InMemoryUserRepository::new();
    users
        .seed([
            UserProfile::new(alice.id(), alice.name(), alice.email()),
            UserProfile::new(bob.id(), bob.name(), bob.email()),
            UserProfile::new(carol.id(), carol.name(), carol.email()),
        ])
        .expect("seeding should succeed");
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(users),
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        alice,
        bob,
        carol,
    }
}

fn report_request() -> CreateTaskRequest {
    CreateTaskRequest::new(
        TaskTitle::new("Write report").expect("valid title"),
        TaskDescription::new("Draft the quarterly report").expect("valid description"),
        future_due_date(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_without_assignee_assigns_the_creator(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create(&harness.alice, report_request())
        .await?;

    ensure!(task.created_by().id() == harness.alice.id());
    ensure!(task.assigned_to().id() == harness.alice.id());
    ensure!(task.status() == TaskStatus::Todo);
    ensure!(task.notifications().len() == 1);
    let entry = task.notifications().first().expect("creation entry");
    ensure!(entry.message() == "Task \"Write report\" has been created and assigned");
    ensure!(!entry.is_read());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_resolves_explicit_assignee_from_directory(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create(
            &harness.alice,
            report_request().with_assigned_to(harness.bob.id()),
        )
        .await?;

    ensure!(task.assigned_to().id() == harness.bob.id());
    ensure!(task.assigned_to().email() == harness.bob.email());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_unknown_assignee(harness: Harness) {
    let unknown = crate::auth::domain::UserId::new();
    let result = harness
        .service
        .create(&harness.alice, report_request().with_assigned_to(unknown))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::AssigneeNotFound(id)) if id == unknown
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_checks_existence_before_authorization(harness: Harness) -> eyre::Result<()> {
    let missing = harness.service.get(&harness.alice, TaskId::new()).await;
    ensure!(matches!(missing, Err(TaskServiceError::TaskNotFound(_))));

    let task = harness
        .service
        .create(&harness.alice, report_request())
        .await?;
    let denied = harness.service.get(&harness.carol, task.id()).await;
    ensure!(matches!(denied, Err(TaskServiceError::Forbidden)));

    let fetched = harness.service.get(&harness.alice, task.id()).await?;
    ensure!(fetched.id() == task.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_never_returns_tasks_to_strangers(harness: Harness) -> eyre::Result<()> {
    harness
        .service
        .create(&harness.alice, report_request())
        .await?;
    harness
        .service
        .create(
            &harness.alice,
            report_request().with_assigned_to(harness.bob.id()),
        )
        .await?;

    let alice_view = harness
        .service
        .list(&harness.alice, &TaskFilter::new())
        .await?;
    ensure!(alice_view.len() == 2);

    let bob_view = harness
        .service
        .list(&harness.bob, &TaskFilter::new())
        .await?;
    ensure!(bob_view.len() == 1);

    let carol_view = harness
        .service
        .list(&harness.carol, &TaskFilter::new())
        .await?;
    ensure!(carol_view.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_newest_first(harness: Harness) -> eyre::Result<()> {
    for title in ["First task", "Second task", "Third task"] {
        let request = CreateTaskRequest::new(
            TaskTitle::new(title).expect("valid title"),
            TaskDescription::new("Ordering test description").expect("valid description"),
            future_due_date(),
        );
        harness.service.create(&harness.alice, request).await?;
    }

    let listing = harness
        .service
        .list(&harness.alice, &TaskFilter::new())
        .await?;
    ensure!(listing.len() == 3);
    ensure!(listing.windows(2).all(|pair| match pair {
        [newer, older] => newer.created_at() >= older.created_at(),
        _ => true,
    }));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_is_restricted_to_the_creator(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create(
            &harness.alice,
            report_request().with_assigned_to(harness.bob.id()),
        )
        .await?;

    // The assignee cannot edit, only complete.
    let denied = harness
        .service
        .update(
            &harness.bob,
            task.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::InProgress),
        )
        .await;
    ensure!(matches!(denied, Err(TaskServiceError::Forbidden)));

    let updated = harness
        .service
        .update(
            &harness.alice,
            task.id(),
            UpdateTaskRequest::new().with_status(TaskStatus::InProgress),
        )
        .await?;
    ensure!(updated.status() == TaskStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassignment_appends_one_notification(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create(&harness.alice, report_request())
        .await?;

    let updated = harness
        .service
        .update(
            &harness.alice,
            task.id(),
            UpdateTaskRequest::new().with_assigned_to(harness.bob.id()),
        )
        .await?;

    ensure!(updated.assigned_to().id() == harness.bob.id());
    ensure!(updated.notifications().len() == 2);
    let entry = updated.notifications().last().expect("reassignment entry");
    ensure!(entry.message() == "Task \"Write report\" has been reassigned");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassignment_to_current_assignee_appends_nothing(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create(&harness.alice, report_request())
        .await?;

    let updated = harness
        .service
        .update(
            &harness.alice,
            task.id(),
            UpdateTaskRequest::new().with_assigned_to(harness.alice.id()),
        )
        .await?;

    ensure!(updated.notifications().len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_complete_is_assignee_only_and_one_way(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create(
            &harness.alice,
            report_request().with_assigned_to(harness.bob.id()),
        )
        .await?;

    // The creator is not the assignee here.
    let denied = harness.service.mark_complete(&harness.alice, task.id()).await;
    ensure!(matches!(denied, Err(TaskServiceError::Forbidden)));

    let completed = harness.service.mark_complete(&harness.bob, task.id()).await?;
    ensure!(completed.status() == TaskStatus::Completed);

    // A second completion must fail, not silently succeed.
    let repeat = harness.service.mark_complete(&harness.bob, task.id()).await;
    ensure!(matches!(repeat, Err(TaskServiceError::Forbidden)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_cascades_and_is_creator_only(harness: Harness) -> eyre::Result<()> {
    let task = harness
        .service
        .create(
            &harness.alice,
            report_request().with_assigned_to(harness.bob.id()),
        )
        .await?;

    let denied = harness.service.delete(&harness.bob, task.id()).await;
    ensure!(matches!(denied, Err(TaskServiceError::Forbidden)));

    harness.service.delete(&harness.alice, task.id()).await?;

    let gone = harness.service.get(&harness.alice, task.id()).await;
    ensure!(matches!(gone, Err(TaskServiceError::TaskNotFound(_))));
    // The ledger went with the task: nothing left to count.
    ensure!(harness.service.unread_count(&harness.bob).await? == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_notification_read_is_idempotent_for_either_party(
    harness: Harness,
) -> eyre::Result<()> {
    let task = harness
        .service
        .create(
            &harness.alice,
            report_request().with_assigned_to(harness.bob.id()),
        )
        .await?;
    let notification_id = task
        .notifications()
        .first()
        .map(crate::task::domain::Notification::id)
        .expect("creation entry");

    let after_first = harness
        .service
        .mark_notification_read(&harness.bob, task.id(), notification_id)
        .await?;
    ensure!(after_first.unread_notifications() == 0);

    // Re-invocation succeeds and the flag never reverses.
    let after_second = harness
        .service
        .mark_notification_read(&harness.alice, task.id(), notification_id)
        .await?;
    ensure!(after_second.unread_notifications() == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_notification_read_rejects_strangers_and_unknown_ids(
    harness: Harness,
) -> eyre::Result<()> {
    let task = harness
        .service
        .create(&harness.alice, report_request())
        .await?;
    let notification_id = task
        .notifications()
        .first()
        .map(crate::task::domain::Notification::id)
        .expect("creation entry");

    let denied = harness
        .service
        .mark_notification_read(&harness.carol, task.id(), notification_id)
        .await;
    ensure!(matches!(denied, Err(TaskServiceError::Forbidden)));

    let missing = harness
        .service
        .mark_notification_read(&harness.alice, task.id(), NotificationId::new())
        .await;
    ensure!(matches!(
        missing,
        Err(TaskServiceError::NotificationNotFound(_))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unread_count_spans_all_visible_tasks(harness: Harness) -> eyre::Result<()> {
    let first = harness
        .service
        .create(
            &harness.alice,
            report_request().with_assigned_to(harness.bob.id()),
        )
        .await?;
    harness
        .service
        .create(&harness.bob, report_request())
        .await?;

    // Bob sees the creation entries of both tasks.
    ensure!(harness.service.unread_count(&harness.bob).await? == 2);

    // Reassigning the first task appends a third visible entry.
    harness
        .service
        .update(
            &harness.alice,
            first.id(),
            UpdateTaskRequest::new().with_assigned_to(harness.carol.id()),
        )
        .await?;
    ensure!(harness.service.unread_count(&harness.carol).await? == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_scenario_create_reassign_complete(harness: Harness) -> eyre::Result<()> {
    let created = harness
        .service
        .create(&harness.alice, report_request())
        .await?;
    ensure!(created.assigned_to().id() == harness.alice.id());

    let reassigned = harness
        .service
        .update(
            &harness.alice,
            created.id(),
            UpdateTaskRequest::new().with_assigned_to(harness.bob.id()),
        )
        .await?;
    ensure!(reassigned.notifications().len() == 2);

    let completed = harness
        .service
        .mark_complete(&harness.bob, created.id())
        .await?;
    ensure!(completed.status() == TaskStatus::Completed);

    let repeat = harness
        .service
        .mark_complete(&harness.bob, created.id())
        .await;
    ensure!(matches!(repeat, Err(TaskServiceError::Forbidden)));

    let stranger_view = harness.service.get(&harness.carol, created.id()).await;
    ensure!(matches!(stranger_view, Err(TaskServiceError::Forbidden)));
    Ok(())
}
