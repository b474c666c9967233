use std::sync::Arc;

use dt_core::ids::WizardSessionId;
use dt_core::wizard::WizardState;
use tokio::sync::Mutex;

/// Shared wizard context containing state, session id and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring several locks, acquire `dispatch_lock` first, then `state`,
/// then `session_id`.
#[derive(Clone)]
pub struct WizardContext {
    state: Arc<Mutex<WizardState>>,
    session_id: Arc<Mutex<WizardSessionId>>,
    /// Serializes dispatch calls so transition, actions and state update run
    /// as one unit. Not taken by `get_state`.
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            session_id: Arc::new(Mutex::new(WizardSessionId::new())),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    pub async fn session_id(&self) -> WizardSessionId {
        self.session_id.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }

    /// Starts a new session id. Call with `dispatch_lock` held.
    pub async fn renew_session(&self) -> WizardSessionId {
        let mut guard = self.session_id.lock().await;
        *guard = WizardSessionId::new();
        guard.clone()
    }
}
