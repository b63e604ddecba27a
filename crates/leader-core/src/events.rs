//! Turn Events
//!
//! Callback list a scheduler notifies when the game turn changes.

use galaxy_types::GameTurn;

type TurnCallback = Box<dyn FnMut(GameTurn) + Send>;

/// Observers of turn changes
#[derive(Default)]
pub struct TurnObservers {
    callbacks: Vec<TurnCallback>,
}

impl TurnObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, run on every notification in registration order
    pub fn subscribe(&mut self, callback: impl FnMut(GameTurn) + Send + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    pub fn notify(&mut self, turn: GameTurn) {
        for callback in self.callbacks.iter_mut() {
            callback(turn);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for TurnObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnObservers")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_runs_callbacks_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut observers = TurnObservers::new();

        let first = Arc::clone(&seen);
        observers.subscribe(move |turn| first.lock().unwrap().push(("first", turn.number())));
        let second = Arc::clone(&seen);
        observers.subscribe(move |turn| second.lock().unwrap().push(("second", turn.number())));

        observers.notify(GameTurn(3));

        assert_eq!(*seen.lock().unwrap(), vec![("first", 3), ("second", 3)]);
    }

    #[test]
    fn test_empty_observers() {
        let mut observers = TurnObservers::new();
        observers.notify(GameTurn::first());
        assert!(observers.is_empty());
    }
}
