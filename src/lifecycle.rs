//! Teardown signalling.
//!
//! A [`CancellationToken`] is created when the backdrop activates. Every
//! scroll subscription registers a removal callback against it; when the
//! scene is destroyed the token fires exactly once and runs those callbacks
//! synchronously, so no update can race a disposed camera or scene.

use std::{cell::RefCell, rc::Rc};

use log::debug;

#[derive(Default)]
struct TokenState {
    cancelled: bool,
    on_cancel: Vec<Box<dyn FnOnce()>>,
}

/// A one-shot cancellation signal shared across subscriptions.
#[derive(Clone, Default)]
pub struct CancellationToken {
    inner: Rc<RefCell<TokenState>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.borrow().cancelled
    }

    /// Register a callback to run when the token fires. If the token has
    /// already fired the callback runs immediately.
    pub fn on_cancel(&self, callback: impl FnOnce() + 'static) {
        let already_cancelled = self.inner.borrow().cancelled;
        if already_cancelled {
            callback();
            return;
        }
        self.inner.borrow_mut().on_cancel.push(Box::new(callback));
    }

    /// Fire the token. The first call runs all registered callbacks
    /// synchronously; later calls are no-ops.
    pub fn cancel(&self) {
        let callbacks = {
            let mut state = self.inner.borrow_mut();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            std::mem::take(&mut state.on_cancel)
        };
        debug!("cancellation token fired, running {} callbacks", callbacks.len());
        for callback in callbacks {
            callback();
        }
    }
}
