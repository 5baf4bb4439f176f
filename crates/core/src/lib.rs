pub mod audio;
pub mod boot;
pub mod catalog;
pub mod error;
pub mod highlight;
pub mod model;
pub mod playback;
pub mod sequencer;

pub use audio::{AudioCue, AudioError, AudioSink, SilentAudio};
pub use boot::{BootPhase, BootProgress};
pub use catalog::Catalog;
pub use error::Error;
pub use highlight::{HighlightBroadcast, HighlightSubscriber, Press};
pub use model::*;
pub use playback::{
    CancelToken, PlaybackEngine, PlaybackSession, PlaybackStatus, StartOutcome, TickOutcome,
};
pub use sequencer::{SceneSequencer, SequencerState};
