#![allow(dead_code)]

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

/// An error with an identity, so that tests can tell instances apart.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub id: usize,
    pub message: String,
}

impl Failure {
    pub fn new(message: &str) -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            message: message.to_string(),
        }
    }

    /// A copy that compares equal to this instance.
    pub fn same(&self) -> Self {
        Self {
            id: self.id,
            message: self.message.clone(),
        }
    }
}

/// Run `f`, expecting it to unwind, and return the payload.
pub fn unwind_payload<T>(f: impl FnOnce() -> T) -> Box<dyn Any + Send> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected an unwind"),
        Err(payload) => payload,
    }
}

/// Counts how many times a closure was called.
#[derive(Default)]
pub struct Calls(Cell<usize>);

impl Calls {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}
