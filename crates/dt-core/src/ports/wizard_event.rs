use crate::ids::WizardSessionId;
use crate::wizard::WizardState;

#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, state: WizardState, session_id: WizardSessionId);
}
