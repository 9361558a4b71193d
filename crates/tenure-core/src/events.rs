//! Lifecycle notifications.
//!
//! Every mutation made through the [`crate::Tracker`] publishes a
//! [`LifecycleEvent`] on a broadcast channel. Views subscribe with
//! [`crate::Tracker::subscribe`] and refetch or re-render on the events they
//! care about; success and error toasts are driven from the same stream.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::{
    models::{ExitDocument, OffboardingStatus, OnboardingStage},
    settlement::SettlementStep,
};

/// Default channel capacity for lifecycle events.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Something that changed on an employee's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A new employee was created and their onboarding initiated
    OnboardingInitiated { employee_id: u64 },
    /// An onboarding moved to its next stage
    StageAdvanced {
        employee_id: u64,
        stage: OnboardingStage,
        progress: u8,
    },
    /// A checklist task was completed or reopened
    TaskUpdated {
        employee_id: u64,
        task: String,
        completed: bool,
        progress: u8,
    },
    /// HR started an offboarding
    OffboardingInitiated { employee_id: u64 },
    /// The offboarding status changed as a result of a task update
    OffboardingStatusChanged {
        employee_id: u64,
        status: OffboardingStatus,
    },
    /// Every settlement step succeeded; documents are ready
    OffboardingCompleted {
        employee_id: u64,
        documents: Vec<ExitDocument>,
    },
    /// A settlement step failed; earlier steps remain applied
    SettlementFailed {
        employee_id: u64,
        step: SettlementStep,
        message: String,
    },
}

impl LifecycleEvent {
    pub fn employee_id(&self) -> u64 {
        match self {
            LifecycleEvent::OnboardingInitiated { employee_id }
            | LifecycleEvent::StageAdvanced { employee_id, .. }
            | LifecycleEvent::TaskUpdated { employee_id, .. }
            | LifecycleEvent::OffboardingInitiated { employee_id }
            | LifecycleEvent::OffboardingStatusChanged { employee_id, .. }
            | LifecycleEvent::OffboardingCompleted { employee_id, .. }
            | LifecycleEvent::SettlementFailed { employee_id, .. } => *employee_id,
        }
    }

    /// Whether the event reports a failure to surface as an error.
    pub fn is_failure(&self) -> bool {
        matches!(self, LifecycleEvent::SettlementFailed { .. })
    }
}

/// Broadcast hub for [`LifecycleEvent`]s.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<LifecycleEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Receives every event published after this call. Slow receivers may
    /// observe `RecvError::Lagged` and miss events.
    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event. Having no subscribers is not an error.
    pub fn publish(&self, event: LifecycleEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_events_in_order() {
        let bus = EventBus::default();
        let mut receiver = bus.subscribe();

        bus.publish(LifecycleEvent::OffboardingInitiated { employee_id: 3 });
        bus.publish(LifecycleEvent::SettlementFailed {
            employee_id: 3,
            step: SettlementStep::Archive,
            message: "store offline".into(),
        });

        let first = receiver.recv().await.expect("First event");
        let second = receiver.recv().await.expect("Second event");
        assert_eq!(first, LifecycleEvent::OffboardingInitiated { employee_id: 3 });
        assert!(second.is_failure());
        assert_eq!(second.employee_id(), 3);
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new(0);
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish(LifecycleEvent::OnboardingInitiated { employee_id: 1 });
    }
}
