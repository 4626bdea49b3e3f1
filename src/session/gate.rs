use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::info;

struct PendingLogin {
    cancel: CancellationToken,
    done: oneshot::Receiver<()>,
}

pub struct SessionGate {
    delay: Duration,
    authenticated: bool,
    pending: Option<PendingLogin>,
}

impl SessionGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            authenticated: false,
            pending: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_logging_in(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin_login(&mut self, runtime: &Handle) {
        if self.authenticated || self.pending.is_some() {
            return;
        }

        let cancel = CancellationToken::new();
        let (done_tx, done_rx) = oneshot::channel();
        let delay = self.delay;
        let token = cancel.clone();

        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = done_tx.send(());
                }
            }
        });

        info!(delay_ms = delay.as_millis() as u64, "Login started");
        self.pending = Some(PendingLogin {
            cancel,
            done: done_rx,
        });
    }

    /// Returns true on the frame the pending login completes.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        match pending.done.try_recv() {
            Ok(()) => {
                self.pending = None;
                self.authenticated = true;
                info!("Login completed");
                true
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.cancel_pending();
        if self.authenticated {
            info!("Logged out");
        }
        self.authenticated = false;
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
            info!("Pending login cancelled");
        }
    }
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
