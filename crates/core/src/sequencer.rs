//! Linear scene sequencer gated on reveal completion.

use tracing::debug;

use crate::model::Scene;
use crate::playback::PlaybackStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Boot,
    Playing(usize),
    Finished,
}

/// Walks an ordered list of scenes. Advancing requires the current scene's
/// reveal to be `Complete`; nothing advances on its own.
#[derive(Debug, Clone)]
pub struct SceneSequencer {
    scenes: Vec<Scene>,
    state: SequencerState,
}

impl SceneSequencer {
    #[must_use]
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self {
            scenes,
            state: SequencerState::Boot,
        }
    }

    /// Leave `Boot`. A sequence with no scenes finishes straight away.
    pub fn start(&mut self) -> SequencerState {
        if self.state == SequencerState::Boot {
            self.state = if self.scenes.is_empty() {
                SequencerState::Finished
            } else {
                SequencerState::Playing(0)
            };
            debug!(state = ?self.state, "sequencer started");
        }
        self.state
    }

    /// Whether the continue action should be offered.
    #[must_use]
    pub fn can_continue(&self, status: PlaybackStatus) -> bool {
        matches!(self.state, SequencerState::Playing(_)) && status == PlaybackStatus::Complete
    }

    /// Move past the current scene once its reveal is complete.
    ///
    /// Returns the (possibly unchanged) state. Past the last scene the
    /// sequencer finishes instead of indexing out of range.
    pub fn advance(&mut self, status: PlaybackStatus) -> SequencerState {
        if !self.can_continue(status) {
            return self.state;
        }
        if let SequencerState::Playing(index) = self.state {
            let next = index + 1;
            self.state = if next < self.scenes.len() {
                SequencerState::Playing(next)
            } else {
                SequencerState::Finished
            };
            debug!(from = index, state = ?self.state, "sequencer advanced");
        }
        self.state
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SequencerState::Playing(index) => Some(index),
            SequencerState::Boot | SequencerState::Finished => None,
        }
    }

    #[must_use]
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current_index().and_then(|index| self.scenes.get(index))
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 == self.scenes.len())
    }

    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MediaRef, SceneId};

    fn scenes(n: u32) -> Vec<Scene> {
        (1..=n)
            .map(|id| {
                Scene::new(
                    SceneId::new(id),
                    MediaRef::new(format!("img-{id}")).unwrap(),
                    format!("scene {id}"),
                    "SYSTEM AI",
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn boot_requires_explicit_start() {
        let mut seq = SceneSequencer::new(scenes(2));
        assert_eq!(seq.advance(PlaybackStatus::Complete), SequencerState::Boot);
        assert_eq!(seq.start(), SequencerState::Playing(0));
        assert_eq!(seq.current_scene().unwrap().id(), SceneId::new(1));
    }

    #[test]
    fn continue_is_gated_on_completion() {
        let mut seq = SceneSequencer::new(scenes(3));
        seq.start();
        for status in [
            PlaybackStatus::Idle,
            PlaybackStatus::Playing,
            PlaybackStatus::Cancelled,
        ] {
            assert!(!seq.can_continue(status));
            assert_eq!(seq.advance(status), SequencerState::Playing(0));
        }
        assert!(seq.can_continue(PlaybackStatus::Complete));
        assert_eq!(seq.advance(PlaybackStatus::Complete), SequencerState::Playing(1));
    }

    #[test]
    fn last_scene_finishes_and_stays_finished() {
        let mut seq = SceneSequencer::new(scenes(2));
        seq.start();
        seq.advance(PlaybackStatus::Complete);
        assert!(seq.is_last());
        assert_eq!(seq.advance(PlaybackStatus::Complete), SequencerState::Finished);
        assert_eq!(seq.advance(PlaybackStatus::Complete), SequencerState::Finished);
        assert_eq!(seq.start(), SequencerState::Finished);
        assert!(seq.current_scene().is_none());
        assert!(!seq.can_continue(PlaybackStatus::Complete));
    }

    #[test]
    fn empty_sequence_finishes_on_start() {
        let mut seq = SceneSequencer::new(Vec::new());
        assert_eq!(seq.start(), SequencerState::Finished);
    }
}
