//! Dependency wiring
//!
//! Builds one wizard session: adapters from `dt-infra`, use cases and the
//! orchestrator from `dt-app`. Everything is owned by the returned runtime;
//! nothing is stored in globals.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::info;

use dt_app::{GetProfileDraft, UpdateDraft, WizardOrchestrator};
use dt_core::config::AppConfig;
use dt_core::form::ValidationPolicy;
use dt_core::wizard::{Route, WizardFlow, WizardStateMachine};
use dt_infra::{ChannelNavigator, InMemoryDraftStore, WatchWizardEventPort, WizardSnapshot};

pub struct WizardRuntime {
    pub orchestrator: WizardOrchestrator,
    pub get_profile: GetProfileDraft,
    pub policy: ValidationPolicy,
    /// Routes pushed by the orchestrator, consumed by the screen host.
    pub routes: mpsc::UnboundedReceiver<Route>,
    pub states: watch::Receiver<Option<WizardSnapshot>>,
}

pub fn build_runtime(config: &AppConfig) -> WizardRuntime {
    let policy = ValidationPolicy::from_config(config);
    let flow = WizardFlow::standard();
    info!(?policy, steps = ?flow.steps(), "building wizard runtime");

    let draft_store = Arc::new(InMemoryDraftStore::new());
    let (navigator, routes) = ChannelNavigator::channel();
    let (event_port, states) = WatchWizardEventPort::channel();

    let orchestrator = WizardOrchestrator::new(
        WizardStateMachine::new(flow, policy),
        Arc::new(UpdateDraft::new(draft_store.clone())),
        Arc::new(navigator),
        Arc::new(event_port),
    );

    WizardRuntime {
        orchestrator,
        get_profile: GetProfileDraft::new(draft_store),
        policy,
        routes,
        states,
    }
}
