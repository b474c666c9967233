//! Wizard orchestrator.
//!
//! This module coordinates the wizard state machine and its side effects.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use dt_core::{
    form::{StepOneInput, StepTwoInput},
    ids::WizardSessionId,
    ports::{NavigatorPort, WizardEventPort},
    wizard::{WizardAction, WizardEvent, WizardState, WizardStateMachine},
};

use crate::usecases::wizard::context::WizardContext;
use crate::usecases::UpdateDraft;

/// Orchestrator that drives wizard state and side effects.
pub struct WizardOrchestrator {
    context: Arc<WizardContext>,
    machine: WizardStateMachine,

    update_draft: Arc<UpdateDraft>,
    navigator: Arc<dyn NavigatorPort>,
    event_port: Arc<dyn WizardEventPort>,
}

impl WizardOrchestrator {
    pub fn new(
        machine: WizardStateMachine,
        update_draft: Arc<UpdateDraft>,
        navigator: Arc<dyn NavigatorPort>,
        event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self {
            context: WizardContext::new(machine.initial_state()).arc(),
            machine,
            update_draft,
            navigator,
            event_port,
        }
    }

    pub async fn submit_biometrics(&self, input: StepOneInput) -> WizardState {
        self.dispatch(WizardEvent::SubmitBiometrics(input)).await
    }

    pub async fn submit_preferences(&self, input: StepTwoInput) -> WizardState {
        self.dispatch(WizardEvent::SubmitPreferences(input)).await
    }

    pub async fn get_state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn session_id(&self) -> WizardSessionId {
        self.context.session_id().await
    }

    /// Clears the draft and returns to the first step under a new session.
    pub async fn restart(&self) -> WizardState {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        self.update_draft.reset().await;
        let session_id = self.context.renew_session().await;
        let state = self.machine.initial_state();
        info!(session_id = %session_id, "wizard session restarted");

        self.context.set_state(state.clone()).await;
        self.event_port
            .emit_wizard_state_changed(state.clone(), session_id)
            .await;
        state
    }

    pub async fn dispatch(&self, event: WizardEvent) -> WizardState {
        // Serialize concurrent dispatch calls so two submits never read the
        // same state and run duplicate actions.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let session_id = self.context.session_id().await;

        let span = info_span!(
            "usecase.wizard_orchestrator.dispatch",
            session_id = %session_id
        );
        async {
            let from = self.context.get_state().await;
            let event_name = event.kind();
            let (next, actions) = self.machine.transition(from.clone(), event);
            info!(
                from = ?from.step,
                to = ?next.step,
                event = event_name,
                errors = next.errors.len(),
                "wizard state transition"
            );

            self.execute_actions(actions).await;
            self.context.set_state(next.clone()).await;
            self.event_port
                .emit_wizard_state_changed(next.clone(), session_id.clone())
                .await;
            next
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) {
        for action in actions {
            debug!(action = action.kind(), "wizard executing action");
            match action {
                WizardAction::CommitPageOne(slice) => {
                    self.update_draft.set_page_one(slice).await;
                }
                WizardAction::CommitPageTwo(slice) => {
                    self.update_draft.set_page_two(slice).await;
                }
                WizardAction::Navigate(route) => {
                    self.navigator.push(route).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dt_core::ports::DraftStorePort;
    use dt_core::profile::{PageOneSlice, PageTwoSlice, UserProfileDraft};
    use dt_core::wizard::{Route, StepId};
    use mockall::predicate::eq;
    use mockall::Sequence;

    mockall::mock! {
        pub DraftStore {}

        #[async_trait]
        impl DraftStorePort for DraftStore {
            async fn set_page_one(&self, slice: PageOneSlice);
            async fn set_page_two(&self, slice: PageTwoSlice);
            async fn snapshot(&self) -> UserProfileDraft;
            async fn reset(&self);
        }
    }

    mockall::mock! {
        pub Navigator {}

        #[async_trait]
        impl NavigatorPort for Navigator {
            async fn push(&self, route: Route);
        }
    }

    struct NoopEvents;

    #[async_trait]
    impl WizardEventPort for NoopEvents {
        async fn emit_wizard_state_changed(&self, _state: WizardState, _session_id: WizardSessionId) {}
    }

    fn orchestrator(store: MockDraftStore, navigator: MockNavigator) -> WizardOrchestrator {
        WizardOrchestrator::new(
            WizardStateMachine::default(),
            Arc::new(UpdateDraft::new(Arc::new(store))),
            Arc::new(navigator),
            Arc::new(NoopEvents),
        )
    }

    #[tokio::test]
    async fn submit_biometrics_writes_before_navigating() {
        let mut seq = Sequence::new();
        let mut store = MockDraftStore::new();
        let mut navigator = MockNavigator::new();

        store
            .expect_set_page_one()
            .withf(|slice| slice.weight == "1.70" && slice.height == "1.70")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        navigator
            .expect_push()
            .with(eq(Route::new("/create")))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let orchestrator = orchestrator(store, navigator);
        let state = orchestrator
            .submit_biometrics(StepOneInput::new("Ana", "60", "30", "1.70"))
            .await;

        assert_eq!(state, WizardState::at(StepId::Preferences));
    }

    #[tokio::test]
    async fn invalid_submit_touches_neither_store_nor_router() {
        let mut store = MockDraftStore::new();
        let mut navigator = MockNavigator::new();
        store.expect_set_page_one().times(0);
        navigator.expect_push().times(0);

        let orchestrator = orchestrator(store, navigator);
        let state = orchestrator
            .submit_biometrics(StepOneInput::new("", "60", "30", "1.70"))
            .await;

        assert_eq!(state.step, StepId::Biometrics);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(orchestrator.get_state().await, state);
    }

    #[tokio::test]
    async fn restart_resets_draft_and_session() {
        let mut store = MockDraftStore::new();
        store.expect_reset().times(1).return_const(());
        let orchestrator = orchestrator(store, MockNavigator::new());

        let before = orchestrator.session_id().await;
        let state = orchestrator.restart().await;

        assert_eq!(state, WizardState::at(StepId::Biometrics));
        assert_ne!(orchestrator.session_id().await, before);
    }
}
