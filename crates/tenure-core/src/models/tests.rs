//! Tests for the models module.

use jiff::{civil::date, Timestamp, ToSpan};

use super::*;
use crate::error::LifecycleError;

fn exit_checklist() -> Checklist {
    Checklist::new(vec![
        Task::new("exit_interview").in_category("documentation"),
        Task::new("equipment_return").in_category("assets"),
    ])
    .expect("Failed to build checklist")
}

#[test]
fn test_set_task_completed_sets_timestamp() {
    let now = Timestamp::now();
    let checklist = exit_checklist()
        .set_task_completed("exit_interview", true, now)
        .expect("Task should exist");

    let task = checklist.task("exit_interview").expect("Task should exist");
    assert!(task.completed);
    assert_eq!(task.completed_at, Some(now));
    assert_eq!(checklist.progress(), 50);
}

#[test]
fn test_set_task_completed_is_idempotent() {
    let first = Timestamp::now();
    let later = first.checked_add(5.minutes()).expect("Timestamp in range");

    let once = exit_checklist()
        .set_task_completed("exit_interview", true, first)
        .expect("Task should exist");
    let twice = once
        .set_task_completed("exit_interview", true, later)
        .expect("Task should exist");

    assert_eq!(once, twice);
}

#[test]
fn test_undo_clears_completion() {
    let now = Timestamp::now();
    let done = exit_checklist()
        .apply(&TaskUpdate::complete("equipment_return").by("hr-admin"), now)
        .expect("Task should exist");
    assert_eq!(
        done.task("equipment_return").and_then(|t| t.completed_by.as_deref()),
        Some("hr-admin")
    );

    let undone = done
        .set_task_completed("equipment_return", false, now)
        .expect("Task should exist");
    let task = undone.task("equipment_return").expect("Task should exist");

    assert!(!task.completed);
    assert_eq!(task.completed_at, None);
    assert_eq!(task.completed_by, None);
    assert!(undone.progress() <= done.progress());
}

#[test]
fn test_unknown_task_is_not_found() {
    let checklist = Checklist::new(vec![Task::new("exit_interview")]).expect("unique");
    let err = checklist
        .set_task_completed("equipment_return", true, Timestamp::now())
        .expect_err("Task should be missing");

    assert!(matches!(err, LifecycleError::TaskNotFound { ref name } if name == "equipment_return"));
    assert!(err.is_not_found());
}

#[test]
fn test_notes_are_kept_on_undo() {
    let now = Timestamp::now();
    let checklist = exit_checklist()
        .apply(
            &TaskUpdate::complete("exit_interview").with_notes("Held with line manager"),
            now,
        )
        .expect("Task should exist")
        .apply(&TaskUpdate::undo("exit_interview"), now)
        .expect("Task should exist");

    assert_eq!(
        checklist.task("exit_interview").and_then(|t| t.notes.as_deref()),
        Some("Held with line manager")
    );
}

#[test]
fn test_duplicate_task_names_rejected() {
    let result = Checklist::new(vec![Task::new("a"), Task::new("b"), Task::new("a")]);
    assert!(matches!(result, Err(LifecycleError::InvalidInput { .. })));
}

#[test]
fn test_by_category_preserves_order() {
    let checklist = templates::offboarding_checklist(date(2026, 11, 30));
    let groups = checklist.by_category();
    let names: Vec<Option<&str>> = groups.iter().map(|(name, _)| *name).collect();

    assert_eq!(
        names,
        vec![
            Some("documentation"),
            Some("assets"),
            Some("it"),
            Some("finance"),
            Some("knowledge_transfer"),
        ]
    );
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[0].1[1].name, "exit_interview");
}

#[test]
fn test_templates() {
    let onboarding = templates::onboarding_checklist();
    assert_eq!(onboarding.total_count(), templates::ONBOARDING_TASKS.len());
    assert!(onboarding.tasks().iter().all(|t| t.category.is_none()));

    let exit = date(2026, 11, 30);
    let offboarding = templates::offboarding_checklist(exit);
    assert_eq!(offboarding.total_count(), templates::OFFBOARDING_TASKS.len());
    assert!(offboarding
        .tasks()
        .iter()
        .all(|t| t.category.is_some() && t.due_date == Some(exit)));
    assert_eq!(offboarding.progress(), 0);
}

#[test]
fn test_stage_parsing_accepts_short_names() {
    assert_eq!(
        "it_setup".parse::<OnboardingStage>(),
        Ok(OnboardingStage::ItSetupStage)
    );
    assert_eq!(
        "TRAINING_STAGE".parse::<OnboardingStage>(),
        Ok(OnboardingStage::TrainingStage)
    );
    assert!("finished".parse::<OnboardingStage>().is_err());
}

#[test]
fn test_offboarding_type_parsing_accepts_dashes() {
    assert_eq!(
        "voluntary-resignation".parse::<OffboardingType>(),
        Ok(OffboardingType::VoluntaryResignation)
    );
    assert_eq!(
        "contract_end".parse::<OffboardingType>(),
        Ok(OffboardingType::ContractEnd)
    );
    assert!("layoff".parse::<OffboardingType>().is_err());
}

#[test]
fn test_stage_serializes_snake_case() {
    let json = serde_json::to_string(&OnboardingStage::ItSetupStage).expect("serialize");
    assert_eq!(json, "\"it_setup_stage\"");
    let json = serde_json::to_string(&OffboardingStatus::PendingExit).expect("serialize");
    assert_eq!(json, "\"pending_exit\"");
}

#[test]
fn test_offboarding_record_derives_status() {
    let now = Timestamp::now();
    let record = Offboarding {
        employee_id: 7,
        offboarding_type: OffboardingType::Retirement,
        reason: None,
        checklist: exit_checklist()
            .set_task_completed("exit_interview", true, now)
            .expect("Task should exist")
            .set_task_completed("equipment_return", true, now)
            .expect("Task should exist"),
        initiated_at: now,
        target_exit_date: date(2026, 12, 31),
        actual_exit_date: None,
        settlement_state: SettlementState::Pending,
        failed_step: None,
        settlement_error: None,
        settled_at: None,
        updated_at: now,
    };

    assert_eq!(record.status(), OffboardingStatus::Completed);
    assert_eq!(record.progress(), 100);
    assert!(!record.is_settled());
}

#[test]
fn test_deserialize_rejects_duplicate_names() {
    let mut json = serde_json::to_value(exit_checklist()).expect("serialize");
    let tasks = json.as_array_mut().expect("Checklist serializes as a task list");
    let duplicate = tasks[0].clone();
    tasks.push(duplicate);

    let result = serde_json::from_value::<Checklist>(json);
    let err = result.expect_err("Duplicate names should be rejected");
    assert!(err.to_string().contains("Duplicate task name 'exit_interview'"));

    let valid = serde_json::to_string(&exit_checklist()).expect("serialize");
    let parsed: Checklist = serde_json::from_str(&valid).expect("deserialize");
    assert_eq!(parsed, exit_checklist());
}
