use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Wall-clock access. `now` resolves immediately with the current time;
/// `notify_after` resolves once the requested delay has elapsed. Repeating
/// timers are built by re-arming from the update loop, which keeps every
/// running timer an explicit, droppable request.
#[derive(Clone)]
pub struct Time<E> {
    context: CapabilityContext<TimeOperation, E>,
}

impl<Ev> Capability<Ev> for Time<Ev> {
    type Operation = TimeOperation;
    type MappedSelf<MappedEv> = Time<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Time::new(self.context.map_event(f))
    }
}

impl<E> Time<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<TimeOperation, E>) -> Self {
        Self { context }
    }

    pub fn now<F>(&self, callback: F)
    where
        F: FnOnce(Instant) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let response = context.request_from_shell(TimeOperation::Now).await;
            context.update_app(callback(response));
        });
    }

    pub fn notify_after<F>(&self, millis: u64, callback: F)
    where
        F: FnOnce(Instant) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let response = context
                .request_from_shell(TimeOperation::NotifyAfter { millis })
                .await;
            context.update_app(callback(response));
        });
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> Default for Time<E>
where
    E: 'static,
{
    fn default() -> Self {
        panic!("Time::default() should only be used in test context with mocking")
    }
}

pub type TimeCapability = Time<Event>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeOperation {
    Now,
    NotifyAfter { millis: u64 },
}

impl Operation for TimeOperation {
    type Output = Instant;
}

/// Milliseconds since the Unix epoch, as reported by the shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instant {
    pub now_ms: u64,
}
