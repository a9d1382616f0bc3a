use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Scroll requests to the shell viewport, fire-and-forget. Scroll *input*
/// flows the other way, as shell-reported events.
#[derive(Clone)]
pub struct Viewport<E> {
    context: CapabilityContext<ViewportOperation, E>,
}

impl<Ev> Capability<Ev> for Viewport<Ev> {
    type Operation = ViewportOperation;
    type MappedSelf<MappedEv> = Viewport<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Viewport::new(self.context.map_event(f))
    }
}

impl<E> Viewport<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<ViewportOperation, E>) -> Self {
        Self { context }
    }

    pub fn scroll_to(&self, top: f64, smooth: bool) {
        let operation = ViewportOperation::ScrollTo { top, smooth };
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }

    /// Instant jump back to the top, used on every screen change.
    pub fn reset(&self) {
        self.scroll_to(0.0, false);
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> Default for Viewport<E>
where
    E: 'static,
{
    fn default() -> Self {
        panic!("Viewport::default() should only be used in test context with mocking")
    }
}

pub type ViewportCapability = Viewport<Event>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ViewportOperation {
    ScrollTo { top: f64, smooth: bool },
}

impl Operation for ViewportOperation {
    type Output = ();
}
