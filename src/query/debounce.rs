//! Debounced values on the tokio timer.
//!
//! A [`Debouncer`] holds the latest raw input and a derived value that only
//! changes once the input has stayed the same for the whole delay window. Every
//! new input aborts the pending timer task and schedules a fresh one; dropping
//! the debouncer aborts whatever is still pending, so no update ever lands after
//! its owner is gone.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Delay applied to search input unless configured otherwise.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delays propagation of a rapidly changing value.
///
/// Must be used from within a tokio runtime, since [`Debouncer::set`] spawns
/// the timer task.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use userdeck::query::Debouncer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut search = Debouncer::new(String::new(), Duration::from_millis(10));
/// search.set("jo".to_string());
/// search.set("john".to_string());
/// assert_eq!(search.current(), "");
///
/// let mut rx = search.subscribe();
/// rx.changed().await.unwrap();
/// assert_eq!(*rx.borrow(), "john");
/// # }
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    raw: T,
    tx: watch::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Creates a debouncer whose raw and derived values both start at `initial`.
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            delay,
            raw: initial,
            tx,
            pending: None,
        }
    }

    /// Records a new input value and reschedules propagation.
    ///
    /// Any update still waiting for its window is cancelled.
    pub fn set(&mut self, value: T) {
        self.cancel_pending();
        self.raw = value.clone();

        let tx = self.tx.clone();
        let deadline = tokio::time::Instant::now() + self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            tx.send_if_modified(|current| {
                if *current == value {
                    false
                } else {
                    *current = value;
                    true
                }
            });
            tracing::trace!("debounced value propagated");
        }));
    }

    /// Sets raw and derived values immediately, dropping any pending update.
    pub fn flush(&mut self, value: T) {
        self.cancel_pending();
        self.raw = value.clone();
        self.tx.send_replace(value);
    }

    /// Latest raw input.
    pub const fn raw(&self) -> &T {
        &self.raw
    }

    /// Current derived (debounced) value.
    #[must_use]
    pub fn current(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Returns a receiver notified whenever the derived value changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Returns `true` while an update is waiting for its window to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// The configured delay window.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
