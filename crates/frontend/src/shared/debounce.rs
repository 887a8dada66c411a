//! Trailing-edge debounce.
//!
//! Each [`Debouncer::call`] restarts the quiescence window; only the last call
//! made inside the window runs, with its own arguments.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::on_cleanup;
use leptos::task::spawn_local;

use super::ticket::TicketGate;

pub struct Debouncer<T> {
    gate: TicketGate,
    delay_ms: u32,
    action: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            delay_ms: self.delay_ms,
            action: Arc::clone(&self.action),
        }
    }
}

impl<T: 'static> Debouncer<T> {
    pub fn new(delay_ms: u32, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            gate: TicketGate::new(),
            delay_ms,
            action: Arc::new(action),
        }
    }

    /// Schedule `action(args)`, cancelling any pending invocation
    pub fn call(&self, args: T) {
        let ticket = self.gate.issue();
        let gate = self.gate.clone();
        let action = Arc::clone(&self.action);
        let delay_ms = self.delay_ms;

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            run_if_current(&gate, ticket, &*action, args);
        });
    }

    /// Drop the pending invocation, if any
    pub fn cancel(&self) {
        self.gate.revoke();
    }
}

fn run_if_current<T>(gate: &TicketGate, ticket: u64, action: &dyn Fn(T), args: T) -> bool {
    if gate.is_current(ticket) {
        action(args);
        true
    } else {
        false
    }
}

/// Create a debouncer scoped to the current reactive owner.
///
/// The pending invocation is cancelled when the owner is disposed, so an
/// unmounted component never receives a late update.
pub fn use_debounced<T: 'static>(
    delay_ms: u32,
    action: impl Fn(T) + Send + Sync + 'static,
) -> Debouncer<T> {
    let debouncer = Debouncer::new(delay_ms, action);
    let scoped = debouncer.clone();
    on_cleanup(move || scoped.cancel());
    debouncer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_only_last_call_in_window_runs() {
        let gate = TicketGate::new();
        let seen = Mutex::new(Vec::new());
        let action = |q: &str| seen.lock().unwrap().push(q.to_string());

        // three keystrokes inside one window, timers expire afterwards in order
        let tickets: Vec<(u64, &str)> = ["l", "la", "lat"]
            .into_iter()
            .map(|q| (gate.issue(), q))
            .collect();
        let fired: Vec<bool> = tickets
            .into_iter()
            .map(|(ticket, q)| run_if_current(&gate, ticket, &action, q))
            .collect();

        assert_eq!(fired, vec![false, false, true]);
        assert_eq!(*seen.lock().unwrap(), vec!["lat".to_string()]);
    }

    #[test]
    fn test_cancelled_call_never_runs() {
        let debouncer = Debouncer::new(300, |_: ()| panic!("must not run"));
        let ticket = debouncer.gate.issue();
        debouncer.cancel();
        assert!(!run_if_current(&debouncer.gate, ticket, &*debouncer.action, ()));
    }
}
