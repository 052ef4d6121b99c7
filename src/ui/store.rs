/// Reactive store cells
///
/// A `StoreCell<T>` is a shared mutable value the interface can read,
/// update and subscribe to, backed by a tokio watch channel. Updates are
/// last-write-wins; there is no coordination between writers.

use std::sync::Arc;

use tokio::sync::watch;

/// One subscribable store cell
#[derive(Debug, Clone)]
pub struct StoreCell<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T: Clone> StoreCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value, waking all subscribers
    pub fn set(&self, value: T) {
        // send_replace succeeds even when nothing subscribes yet
        self.tx.send_replace(value);
    }

    /// Watch for changes
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for StoreCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_initial_value() {
        let cell = StoreCell::new(7usize);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn test_set_without_subscribers() {
        let cell = StoreCell::new(false);
        cell.set(true);
        assert!(cell.get());
    }

    #[tokio::test]
    async fn test_subscribers_observe_updates() {
        let cell = StoreCell::new(0usize);
        let mut rx = cell.subscribe();

        cell.set(3);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 3);
    }

    #[test]
    fn test_clones_share_the_same_value() {
        let a = StoreCell::new(String::new());
        let b = a.clone();

        a.set("hello".to_string());
        assert_eq!(b.get(), "hello");
    }

    #[test]
    fn test_last_write_wins() {
        let cell = StoreCell::new(0usize);
        cell.set(1);
        cell.set(2);
        assert_eq!(cell.get(), 2);
    }
}
