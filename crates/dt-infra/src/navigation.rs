//! Channel-backed router
//!
//! Pushed routes are forwarded to whoever renders screens. Navigation is
//! fire-and-forget: if the receiving side is gone the route is dropped with
//! a warning.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{info, warn};

use dt_core::ports::NavigatorPort;
use dt_core::wizard::Route;

pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NavigatorPort for ChannelNavigator {
    async fn push(&self, route: Route) {
        info!(route = %route, "navigate");
        if let Err(err) = self.tx.send(route) {
            warn!(route = %err.0, "navigation dropped: no screen host listening");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pushed_routes_arrive_in_order() {
        let (navigator, mut rx) = ChannelNavigator::channel();

        navigator.push(Route::new("/create")).await;
        navigator.push(Route::new("/nutrition")).await;

        assert_eq!(rx.recv().await, Some(Route::new("/create")));
        assert_eq!(rx.recv().await, Some(Route::new("/nutrition")));
    }

    #[tokio::test]
    async fn push_without_receiver_does_not_panic() {
        let (navigator, rx) = ChannelNavigator::channel();
        drop(rx);

        navigator.push(Route::new("/create")).await;
    }
}
