//! Scroll listener
//!
//! Forwards offsets from a `watch` channel into the controller. The listener
//! is detached when dropped, however teardown happens.

use crate::controller::NavigationController;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Scoped subscription of a controller to a scroll-offset source
///
/// `watch` keeps only the latest offset, so a burst of scroll events collapses
/// into at most one pending update.
pub struct ScrollListener {
    handle: JoinHandle<()>,
}

impl ScrollListener {
    /// Spawn the forwarding task on the current tokio runtime
    pub fn spawn(controller: NavigationController, mut offsets: watch::Receiver<f64>) -> Self {
        let handle = tokio::spawn(async move {
            let initial = *offsets.borrow_and_update();
            controller.set_scrolled(initial);

            while offsets.changed().await.is_ok() {
                let offset = *offsets.borrow_and_update();
                controller.set_scrolled(offset);
            }
            debug!("Scroll source closed, listener finished");
        });

        Self { handle }
    }

    /// False once the source closed or the task was aborted
    pub fn is_attached(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
