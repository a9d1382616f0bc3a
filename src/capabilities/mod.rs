mod audio;
mod navigate;
mod speech;
mod storage;
mod time;
mod viewport;

pub use self::audio::{AudioOperation, AudioPlayback};
pub use self::navigate::{Navigate, NavigateOperation};
pub use self::speech::{Speech, SpeechOperation};
pub use self::storage::{
    Storage, StorageError, StorageOperation, StorageOutput, StorageResult,
};
pub use self::time::{Instant, Time, TimeOperation};
pub use self::viewport::{Viewport, ViewportOperation};

// Crux built-ins cover rendering and HTTP directly.
pub use crux_core::render::Render;
pub use crux_http::Http;

use self::audio::AudioPlayback as Audio;
use crate::app::App;
use crate::event::Event;

pub type AppHttp = Http<Event>;
pub type AppRender = Render<Event>;
pub type AppStorage = Storage<Event>;
pub type AppTime = Time<Event>;
pub type AppAudio = AudioPlayback<Event>;
pub type AppSpeech = Speech<Event>;
pub type AppViewport = Viewport<Event>;
pub type AppNavigate = Navigate<Event>;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub http: Http<Event>,
    pub storage: Storage<Event>,
    pub time: Time<Event>,
    pub audio: Audio<Event>,
    pub speech: Speech<Event>,
    pub viewport: Viewport<Event>,
    pub navigate: Navigate<Event>,
}
