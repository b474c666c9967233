//! Watch-channel publisher for wizard state.

use async_trait::async_trait;
use tokio::sync::watch;

use dt_core::ids::WizardSessionId;
use dt_core::ports::WizardEventPort;
use dt_core::wizard::WizardState;

/// Latest state published for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSnapshot {
    pub state: WizardState,
    pub session_id: WizardSessionId,
}

/// Publishes every state change; subscribers only see the latest one.
pub struct WatchWizardEventPort {
    tx: watch::Sender<Option<WizardSnapshot>>,
}

impl WatchWizardEventPort {
    pub fn channel() -> (Self, watch::Receiver<Option<WizardSnapshot>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<WizardSnapshot>> {
        self.tx.subscribe()
    }
}

#[async_trait]
impl WizardEventPort for WatchWizardEventPort {
    async fn emit_wizard_state_changed(&self, state: WizardState, session_id: WizardSessionId) {
        // send_replace keeps the value even with no live receiver
        self.tx.send_replace(Some(WizardSnapshot { state, session_id }));
    }
}
