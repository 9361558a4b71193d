mod common;

use common::create_test_tracker;
use jiff::{civil::date, Timestamp};
use rust_decimal::Decimal;
use tenure_core::{
    models::{templates, Task},
    params::{CreateEmployee, Id, InitiateOffboarding, ListEmployees, SetTaskCompletion},
    progress::{compute_checklist_progress, derive_status, next_stage, progress_for_stage},
    Checklist, EmployeeStatus, LifecycleError, LifecycleEvent, OffboardingStatus, OffboardingType,
    OnboardingStage, OptimisticChecklist, Settled, TaskUpdate,
};

#[test]
fn test_stage_advance_from_not_started() {
    let stage = next_stage(OnboardingStage::NotStarted).expect("Stage has a successor");
    assert_eq!(stage, OnboardingStage::ContractStage);
    assert_eq!(progress_for_stage(stage), 20);
}

#[test]
fn test_half_complete_offboarding() {
    let checklist = Checklist::new(vec![Task::new("exit_interview"), Task::new("equipment_return")])
        .expect("unique names")
        .set_task_completed("exit_interview", true, Timestamp::now())
        .expect("Task should exist");

    assert_eq!(compute_checklist_progress(&checklist), 50);
    assert_eq!(derive_status(&checklist), OffboardingStatus::InProgress);
}

#[test]
fn test_unknown_task_and_terminal_stage_errors() {
    let checklist = Checklist::new(vec![Task::new("exit_interview")]).expect("unique names");
    let err = checklist
        .set_task_completed("equipment_return", true, Timestamp::now())
        .expect_err("Task should be missing");
    assert!(err.is_not_found());

    let err = next_stage(OnboardingStage::Completed).expect_err("No successor");
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_full_employee_lifecycle() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let mut events = tracker.subscribe();

    let employee = tracker
        .create_employee(&CreateEmployee {
            name: "Mei Tanaka".to_string(),
            department: Some("Design".to_string()),
            monthly_salary: Decimal::from(6000),
            unused_leave_days: 10,
            hire_date: Some(date(2021, 3, 1)),
            ..Default::default()
        })
        .await
        .expect("Failed to create employee");
    let id = Id { id: employee.id };

    for _ in OnboardingStage::ALL.iter().skip(1) {
        tracker.advance_stage(&id).await.expect("Failed to advance");
    }
    let employee = tracker.get_employee(&id).await.expect("Failed to get employee");
    assert_eq!(employee.status, EmployeeStatus::Active);

    tracker
        .initiate_offboarding(&InitiateOffboarding {
            employee_id: employee.id,
            offboarding_type: OffboardingType::Retirement,
            reason: None,
            target_exit_date: date(2026, 2, 28),
        })
        .await
        .expect("Failed to initiate offboarding");

    let mut settled = None;
    for (_, name) in templates::OFFBOARDING_TASKS {
        let update = tracker
            .set_offboarding_task(&SetTaskCompletion {
                employee_id: employee.id,
                task: name.to_string(),
                completed: true,
                completed_by: None,
                notes: None,
            })
            .await
            .expect("Failed to complete task");
        if update.settlement.is_some() {
            assert!(settled.is_none(), "Settlement ran more than once");
            settled = Some(update);
        }
    }
    let settled = settled.expect("Settlement should run on completion");
    assert!(settled.record.is_settled());

    let roster = tracker
        .list_employees(&ListEmployees::default())
        .await
        .expect("Failed to list roster");
    assert!(roster.is_empty());
    let archived = tracker
        .list_employees(&ListEmployees {
            archived: true,
            department: None,
        })
        .await
        .expect("Failed to list archived");
    assert_eq!(archived.len(), 1);

    let mut kinds = Vec::new();
    while let Ok(event) = events.try_recv() {
        assert_eq!(event.employee_id(), employee.id);
        kinds.push(event);
    }
    assert!(matches!(
        kinds.first(),
        Some(LifecycleEvent::OnboardingInitiated { .. })
    ));
    assert!(matches!(
        kinds.last(),
        Some(LifecycleEvent::OffboardingCompleted { .. })
    ));
}

#[tokio::test]
async fn test_optimistic_view_reverts_on_rejection() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let employee = tracker
        .create_employee(&CreateEmployee {
            name: "Mei Tanaka".to_string(),
            monthly_salary: Decimal::from(6000),
            hire_date: Some(date(2021, 3, 1)),
            active: true,
            ..Default::default()
        })
        .await
        .expect("Failed to create employee");
    let record = tracker
        .initiate_offboarding(&InitiateOffboarding {
            employee_id: employee.id,
            offboarding_type: OffboardingType::ContractEnd,
            reason: None,
            target_exit_date: date(2026, 2, 28),
        })
        .await
        .expect("Failed to initiate offboarding");

    let mut view = OptimisticChecklist::new(record.checklist);

    // Accepted change: the store's checklist replaces the optimistic one
    let update = TaskUpdate::complete("exit_interview");
    view.apply(&update, Timestamp::now()).expect("Task should exist");
    let outcome = tracker
        .set_offboarding_task(&SetTaskCompletion {
            employee_id: employee.id,
            task: update.name.clone(),
            completed: true,
            ..Default::default()
        })
        .await
        .map(|u| u.record.checklist);
    assert!(matches!(view.settle(outcome), Settled::Confirmed));
    assert_eq!(view.current().completed_count(), 1);

    // Rejected change: the store refuses an unknown employee
    view.apply(&TaskUpdate::complete("equipment_return"), Timestamp::now())
        .expect("Task should exist");
    assert_eq!(view.current().completed_count(), 2);
    let outcome = tracker
        .set_offboarding_task(&SetTaskCompletion {
            employee_id: employee.id + 100,
            task: "equipment_return".to_string(),
            completed: true,
            ..Default::default()
        })
        .await
        .map(|u| u.record.checklist);
    assert!(matches!(
        view.settle(outcome),
        Settled::Reverted(LifecycleError::EmployeeNotFound { .. })
    ));
    assert_eq!(view.current().completed_count(), 1);
}
