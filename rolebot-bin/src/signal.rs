use tokio::sync::watch;

use std::sync::OnceLock;

static TERM_TX: OnceLock<watch::Sender<bool>> = OnceLock::new();

fn sender() -> &'static watch::Sender<bool> {
    TERM_TX.get_or_init(|| watch::channel(false).0)
}

/// Subscribe to the shutdown signal. Returns a [`ShutdownListener`] whose
/// [`wait`](ShutdownListener::wait) completes when a shutdown signal is received.
pub fn subscribe() -> ShutdownListener {
    ShutdownListener {
        rx: sender().subscribe(),
    }
}

/// Sends a signal to terminate to all [`ShutdownListener`]s, prompting them
/// to shut down. A `terminate()` call cannot be undone.
pub fn terminate() {
    sender().send_replace(true);
}

/// A listener for shutdown signals.
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Completes once [`terminate`] was called, including before the listener was created.
    pub async fn wait(mut self) {
        while !*self.rx.borrow_and_update() {
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Spawns the task translating os signals into [`terminate`] calls. Must be called from
/// within the runtime.
pub fn init() {
    tokio::spawn(async {
        wait_for_signal().await;
        log::info!("[CORE] Received shutdown signal");
        terminate();
    });
}

/// Waits for SIGINT or SIGTERM.
#[cfg(target_family = "unix")]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(err) => {
            log::error!("[CORE] Failed to install SIGTERM handler: {}", err);
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => (),
        _ = tokio::signal::ctrl_c() => (),
    }
}

#[cfg(not(target_family = "unix"))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
