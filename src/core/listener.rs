//! Pointer listener lifecycle
//!
//! The host's pointer events write into a [`PointerCell`] (last write wins);
//! the render loop reads the cell and passes the value into
//! `ParticleField::update`. A [`PointerSubscription`] owns the registration
//! and removes it exactly once when detached or dropped.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::error::ListenerError;
use super::pointer::PointerState;

/// Callback invoked by the host on every pointer move.
pub type PointerSink = Box<dyn FnMut(PointerState)>;

/// Host-side pointer event registration (DOM window, test double, ...).
pub trait PointerSource {
    type Token;

    fn subscribe(&mut self, sink: PointerSink) -> Result<Self::Token, ListenerError>;
    fn unsubscribe(&mut self, token: Self::Token);
}

/// Latest pointer position, shared between the event callback and the
/// render loop. Single-threaded.
#[derive(Clone, Debug, Default)]
pub struct PointerCell(Rc<Cell<Option<PointerState>>>);

impl PointerCell {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&self, state: PointerState) {
        self.0.set(Some(state));
    }

    #[inline]
    pub fn get(&self) -> Option<PointerState> {
        self.0.get()
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    /// Sink that overwrites this cell.
    pub fn sink(&self) -> PointerSink {
        let cell = self.clone();
        Box::new(move |state| cell.set(state))
    }
}

/// Live pointer registration. Deregisters on `detach` or drop.
pub struct PointerSubscription<S: PointerSource> {
    source: S,
    token: Option<S::Token>,
}

impl<S: PointerSource> PointerSubscription<S> {
    /// Register a sink writing into `cell`.
    pub fn attach(mut source: S, cell: &PointerCell) -> Result<Self, ListenerError> {
        let token = source.subscribe(cell.sink())?;
        debug!("Pointer listener registered");
        Ok(Self {
            source,
            token: Some(token),
        })
    }

    pub fn is_attached(&self) -> bool {
        self.token.is_some()
    }

    /// Remove the registration. Later calls (and the drop) do nothing.
    pub fn detach(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.unsubscribe(token);
            debug!("Pointer listener removed");
        }
    }
}

impl<S: PointerSource> Drop for PointerSubscription<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
