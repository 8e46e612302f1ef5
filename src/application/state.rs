use crate::model::user::UserRecord;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Observable shared cell
///
/// Writers replace the value; readers either take a snapshot with
/// [`StateCell::get`] or [`StateCell::subscribe`] to be woken on change.
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    /// Creates a cell holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            tx: watch::Sender::new(initial),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Receiver notified on every [`StateCell::set`]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateCell").field(&*self.tx.borrow()).finish()
    }
}

/// Authentication state shared by every accessor of one application
///
/// The two cells are independent: a reader may observe one updated before the
/// other.
#[derive(Debug, Default)]
pub struct AuthState {
    /// Whether the last current-user fetch succeeded
    pub is_authenticated: Arc<StateCell<bool>>,
    /// User returned by the last successful fetch
    pub user: Arc<StateCell<Option<UserRecord>>>,
}

impl AuthState {
    /// Unauthenticated state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful fetch
    pub fn set_authenticated(&self, user: UserRecord) {
        self.is_authenticated.set(true);
        self.user.set(Some(user));
    }

    /// Back to the unauthenticated default
    pub fn reset(&self) {
        self.is_authenticated.set(false);
        self.user.set(None);
    }
}
