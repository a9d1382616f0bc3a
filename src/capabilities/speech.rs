use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Text-to-speech synthesis, fire-and-forget.
#[derive(Clone)]
pub struct Speech<E> {
    context: CapabilityContext<SpeechOperation, E>,
}

impl<Ev> Capability<Ev> for Speech<Ev> {
    type Operation = SpeechOperation;
    type MappedSelf<MappedEv> = Speech<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Speech::new(self.context.map_event(f))
    }
}

impl<E> Speech<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<SpeechOperation, E>) -> Self {
        Self { context }
    }

    pub fn speak(&self, text: impl Into<String>, lang: &str, rate: f32) {
        let operation = SpeechOperation::Speak {
            text: text.into(),
            lang: lang.to_string(),
            rate,
        };
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> Default for Speech<E>
where
    E: 'static,
{
    fn default() -> Self {
        panic!("Speech::default() should only be used in test context with mocking")
    }
}

pub type SpeechCapability = Speech<Event>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SpeechOperation {
    Speak { text: String, lang: String, rate: f32 },
}

impl Operation for SpeechOperation {
    type Output = ();
}
