use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Commands for the shell-owned audio element. All fire-and-forget; the
/// shell reports progress back through its own events (duration loaded,
/// position updates, playback ended).
#[derive(Clone)]
pub struct AudioPlayback<E> {
    context: CapabilityContext<AudioOperation, E>,
}

impl<Ev> Capability<Ev> for AudioPlayback<Ev> {
    type Operation = AudioOperation;
    type MappedSelf<MappedEv> = AudioPlayback<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        AudioPlayback::new(self.context.map_event(f))
    }
}

impl<E> AudioPlayback<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<AudioOperation, E>) -> Self {
        Self { context }
    }

    pub fn load(&self, url: impl Into<String>) {
        self.notify(AudioOperation::Load { url: url.into() });
    }

    pub fn play(&self) {
        self.notify(AudioOperation::Play);
    }

    pub fn pause(&self) {
        self.notify(AudioOperation::Pause);
    }

    pub fn seek(&self, seconds: f64) {
        self.notify(AudioOperation::Seek { seconds });
    }

    /// Hand downloaded bytes to the shell to store as a local file.
    pub fn save_file(&self, filename: impl Into<String>, data: Vec<u8>) {
        self.notify(AudioOperation::SaveFile {
            filename: filename.into(),
            data,
        });
    }

    fn notify(&self, operation: AudioOperation) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(operation).await;
        });
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> Default for AudioPlayback<E>
where
    E: 'static,
{
    fn default() -> Self {
        panic!("AudioPlayback::default() should only be used in test context with mocking")
    }
}

pub type AudioCapability = AudioPlayback<Event>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AudioOperation {
    Load {
        url: String,
    },
    Play,
    Pause,
    Seek {
        seconds: f64,
    },
    SaveFile {
        filename: String,
        #[serde(with = "serde_bytes")]
        data: Vec<u8>,
    },
}

impl Operation for AudioOperation {
    type Output = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_file_round_trips_through_json() {
        let op = AudioOperation::SaveFile {
            filename: "다카마쓰 트립 2026.mp3".to_string(),
            data: vec![0x49, 0x44, 0x33],
        };
        let json = serde_json::to_vec(&op).unwrap();
        let back: AudioOperation = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, op);
    }
}
