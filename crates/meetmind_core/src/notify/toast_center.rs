//! Toast provider, notifier capability and per-toast expiry tasks.
//!
//! # Responsibility
//! - Append toasts and schedule one independent removal task per toast.
//! - Cancel outstanding removal tasks when the provider goes away.
//!
//! # Invariants
//! - Each toast expires `ttl` after its own creation; other toasts never
//!   reset or extend that deadline.
//! - There is no dismissal API and no cap on visible toasts.
//! - `ToastId`s are strictly increasing per provider.

use crate::model::toast::{Toast, ToastId, ToastKind};
use log::{debug, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Delay between creation and automatic removal of a toast.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(3200);

const OUTSIDE_PROVIDER_MESSAGE: &str = "notifier must be used inside a ToastProvider";

/// Notification subsystem error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyError {
    /// Provider was created outside a tokio runtime.
    NoRuntime,
    /// The provider backing this notifier has been dropped.
    ProviderGone,
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuntime => write!(f, "toast provider requires a running tokio runtime"),
            Self::ProviderGone => f.write_str(OUTSIDE_PROVIDER_MESSAGE),
        }
    }
}

impl Error for NotifyError {}

/// Pending removal of one toast.
///
/// Cancelling stops the timer; the toast then stays until its provider is
/// dropped.
#[derive(Debug)]
pub struct ScheduledRemoval {
    handle: JoinHandle<()>,
}

impl ScheduledRemoval {
    pub fn cancel(self) {
        self.handle.abort();
    }
}

#[derive(Debug, Default)]
struct ToastState {
    toasts: Vec<Toast>,
    removals: HashMap<ToastId, ScheduledRemoval>,
    last_id: u64,
}

#[derive(Debug)]
struct ToastShared {
    state: Mutex<ToastState>,
    ttl: Duration,
    runtime: Handle,
}

impl ToastShared {
    fn lock(&self) -> MutexGuard<'_, ToastState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(self: &Arc<Self>, message: String, kind: ToastKind) -> ToastId {
        let deadline = Instant::now() + self.ttl;
        let mut state = self.lock();
        let id = ToastId(unix_millis().max(state.last_id + 1));
        state.last_id = id.0;
        state.toasts.push(Toast { id, message, kind });

        let shared = Arc::downgrade(self);
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(shared) = shared.upgrade() {
                shared.expire(id);
            }
        });
        state.removals.insert(id, ScheduledRemoval { handle });

        debug!(
            "event=toast_show module=notify status=ok id={} kind={} visible={}",
            id,
            kind.as_str(),
            state.toasts.len()
        );
        id
    }

    fn expire(&self, id: ToastId) {
        let mut state = self.lock();
        state.toasts.retain(|toast| toast.id != id);
        state.removals.remove(&id);
        debug!(
            "event=toast_expire module=notify status=ok id={} visible={}",
            id,
            state.toasts.len()
        );
    }
}

/// Owner of the visible toast list.
///
/// Notifiers handed out by [`ToastProvider::notifier`] work only while the
/// provider is alive.
#[derive(Debug)]
pub struct ToastProvider {
    shared: Arc<ToastShared>,
}

impl ToastProvider {
    /// Creates a provider with [`DEFAULT_TOAST_TTL`].
    ///
    /// # Errors
    /// - [`NotifyError::NoRuntime`] when called outside a tokio runtime.
    pub fn new() -> Result<Self, NotifyError> {
        Self::with_ttl(DEFAULT_TOAST_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Result<Self, NotifyError> {
        let runtime = Handle::try_current().map_err(|_| NotifyError::NoRuntime)?;
        Ok(Self {
            shared: Arc::new(ToastShared {
                state: Mutex::new(ToastState::default()),
                ttl,
                runtime,
            }),
        })
    }

    /// Returns a capability to post toasts into this provider.
    pub fn notifier(&self) -> Notifier {
        Notifier {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Snapshot of visible toasts in creation order.
    pub fn visible(&self) -> Vec<Toast> {
        self.shared.lock().toasts.clone()
    }

    /// Number of removal tasks still waiting for their deadline.
    pub fn pending_removals(&self) -> usize {
        self.shared.lock().removals.len()
    }

    pub fn ttl(&self) -> Duration {
        self.shared.ttl
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        let mut state = self.shared.lock();
        let pending = state.removals.len();
        for (_, removal) in state.removals.drain() {
            removal.cancel();
        }
        state.toasts.clear();
        if pending > 0 {
            warn!("event=toast_provider_drop module=notify status=ok cancelled={pending}");
        }
    }
}

/// Capability to post toasts into one [`ToastProvider`].
#[derive(Debug, Clone)]
pub struct Notifier {
    shared: Weak<ToastShared>,
}

impl Notifier {
    /// Posts a success toast.
    ///
    /// # Panics
    /// - When the provider has been dropped.
    pub fn notify(&self, message: impl Into<String>) -> ToastId {
        self.notify_with(message, ToastKind::Success)
    }

    /// Posts a toast of the given kind.
    ///
    /// # Panics
    /// - When the provider has been dropped.
    pub fn notify_with(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        match self.try_notify_with(message, kind) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Non-panicking variant of [`Self::notify_with`].
    pub fn try_notify_with(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
    ) -> Result<ToastId, NotifyError> {
        let shared = self.shared.upgrade().ok_or(NotifyError::ProviderGone)?;
        Ok(shared.push(message.into(), kind))
    }

    /// Returns whether the backing provider is still alive.
    pub fn is_active(&self) -> bool {
        self.shared.strong_count() > 0
    }
}

/// Unwraps an optional notifier capability.
///
/// # Panics
/// - When `notifier` is `None`; call sites without a provider are a
///   programming error.
pub fn require_notifier(notifier: Option<&Notifier>) -> &Notifier {
    match notifier {
        Some(notifier) => notifier,
        None => panic!("{OUTSIDE_PROVIDER_MESSAGE}"),
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{NotifyError, ToastProvider};

    #[test]
    fn provider_outside_runtime_is_rejected() {
        let err = ToastProvider::new().unwrap_err();
        assert_eq!(err, NotifyError::NoRuntime);
    }

    #[test]
    fn provider_gone_message_names_the_provider() {
        assert!(NotifyError::ProviderGone
            .to_string()
            .contains("inside a ToastProvider"));
    }
}
