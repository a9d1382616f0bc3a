use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Opens an external URL in the system browser, fire-and-forget.
#[derive(Clone)]
pub struct Navigate<E> {
    context: CapabilityContext<NavigateOperation, E>,
}

impl<Ev> Capability<Ev> for Navigate<Ev> {
    type Operation = NavigateOperation;
    type MappedSelf<MappedEv> = Navigate<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Navigate::new(self.context.map_event(f))
    }
}

impl<E> Navigate<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<NavigateOperation, E>) -> Self {
        Self { context }
    }

    pub fn open_external(&self, url: impl Into<String>) {
        let operation = NavigateOperation::OpenExternal { url: url.into() };
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> Default for Navigate<E>
where
    E: 'static,
{
    fn default() -> Self {
        panic!("Navigate::default() should only be used in test context with mocking")
    }
}

pub type NavigateCapability = Navigate<Event>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigateOperation {
    OpenExternal { url: String },
}

impl Operation for NavigateOperation {
    type Output = ();
}
