use async_trait::async_trait;

use crate::wizard::Route;

/// Router used by the wizard. Fire-and-forget: nothing is returned.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn push(&self, route: Route);
}

