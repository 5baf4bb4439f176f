use sense_core::playback::PlaybackStatus;
use services::RevealFrame;

/// Status of the reveal for `scene_text`.
///
/// Right after the sequencer moves on, the frame still describes the previous
/// scene until the new cycle reports in; that stale frame must not unlock
/// the continue action.
#[must_use]
pub fn scene_status(frame: &RevealFrame, scene_text: &str) -> PlaybackStatus {
    match frame.status {
        PlaybackStatus::Complete if frame.text != scene_text => PlaybackStatus::Playing,
        status => status,
    }
}

#[must_use]
pub fn scene_counter(index: usize, total: usize) -> String {
    format!("{:02} / {:02}", index + 1, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &str, status: PlaybackStatus) -> RevealFrame {
        RevealFrame {
            text: text.into(),
            status,
        }
    }

    #[test]
    fn stale_completion_does_not_count() {
        let done = frame("first scene", PlaybackStatus::Complete);
        assert_eq!(scene_status(&done, "first scene"), PlaybackStatus::Complete);
        assert_eq!(scene_status(&done, "second scene"), PlaybackStatus::Playing);
    }

    #[test]
    fn other_statuses_pass_through() {
        let playing = frame("fi", PlaybackStatus::Playing);
        assert_eq!(scene_status(&playing, "first"), PlaybackStatus::Playing);
        let cancelled = frame("", PlaybackStatus::Cancelled);
        assert_eq!(scene_status(&cancelled, "first"), PlaybackStatus::Cancelled);
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(scene_counter(0, 5), "01 / 05");
        assert_eq!(scene_counter(4, 5), "05 / 05");
    }
}
