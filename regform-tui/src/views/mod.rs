//! Views and the navigation seam

mod form;
mod success;

pub use form::FormView;
pub use success::SuccessView;

use regform_lib::{Navigator, Registration, ViewId};

/// Buffers the navigation raised while a view handles an event. The app loop
/// applies it afterwards, handing the payload to the new view's constructor,
/// so the record crosses the boundary exactly once and through no other
/// channel.
#[derive(Debug, Default)]
pub struct Router {
    pending: Option<(ViewId, Registration)>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending transition, if any. Taking it clears it.
    pub fn take(&mut self) -> Option<(ViewId, Registration)> {
        self.pending.take()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, view: ViewId, payload: Registration) {
        self.pending = Some((view, payload));
    }
}
