use std::fmt;

/// The host environment refused to start playback (autoplay policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRejected;

impl fmt::Display for PlaybackRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playback rejected by the host environment")
    }
}

impl std::error::Error for PlaybackRejected {}

/// The audio widget's runtime, as seen by the unlock policy.
pub trait AudioPlayer {
    fn play(&mut self) -> Result<(), PlaybackRejected>;
    fn pause(&mut self);
}

/// Autoplay-with-deferred-unlock policy.
///
/// Playback is attempted at load; if the host rejects it, a one-shot retry is
/// armed and consumed by the first user interaction (click or touch), after
/// which interactions are ignored again.
#[derive(Clone, Debug, Default)]
pub struct AudioUnlock {
    playing: bool,
    deferred: bool,
}

impl AudioUnlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a deferred retry is armed.
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    /// Try to start playback at page load.
    pub fn attempt_autoplay(&mut self, player: &mut dyn AudioPlayer) {
        match player.play() {
            Ok(()) => self.playing = true,
            Err(PlaybackRejected) => self.deferred = true,
        }
    }

    /// First user interaction after a rejected autoplay: retry once, then
    /// disarm regardless of the outcome.
    pub fn user_interaction(&mut self, player: &mut dyn AudioPlayer) {
        if !self.deferred {
            return;
        }
        self.deferred = false;
        if player.play().is_ok() {
            self.playing = true;
        }
    }

    /// The single audio control: pause when playing, play when paused.
    pub fn toggle(&mut self, player: &mut dyn AudioPlayer) {
        if self.playing {
            player.pause();
            self.playing = false;
        } else if player.play().is_ok() {
            self.playing = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePlayer {
        reject_first: u32,
        plays: u32,
        pauses: u32,
    }

    impl FakePlayer {
        fn new(reject_first: u32) -> Self {
            FakePlayer {
                reject_first,
                plays: 0,
                pauses: 0,
            }
        }
    }

    impl AudioPlayer for FakePlayer {
        fn play(&mut self) -> Result<(), PlaybackRejected> {
            if self.reject_first > 0 {
                self.reject_first -= 1;
                return Err(PlaybackRejected);
            }
            self.plays += 1;
            Ok(())
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[test]
    fn allowed_autoplay_just_plays() {
        let mut player = FakePlayer::new(0);
        let mut unlock = AudioUnlock::new();
        unlock.attempt_autoplay(&mut player);
        assert!(unlock.is_playing());
        assert!(!unlock.is_deferred());
        assert_eq!(player.plays, 1);
    }

    #[test]
    fn rejected_autoplay_arms_deferred_retry() {
        let mut player = FakePlayer::new(1);
        let mut unlock = AudioUnlock::new();
        unlock.attempt_autoplay(&mut player);
        assert!(!unlock.is_playing());
        assert!(unlock.is_deferred());
    }

    #[test]
    fn first_interaction_plays_and_disarms() {
        let mut player = FakePlayer::new(1);
        let mut unlock = AudioUnlock::new();
        unlock.attempt_autoplay(&mut player);

        unlock.user_interaction(&mut player);
        assert!(unlock.is_playing());
        assert!(!unlock.is_deferred());
        assert_eq!(player.plays, 1);

        // The handler removed itself: later interactions do nothing.
        unlock.user_interaction(&mut player);
        assert_eq!(player.plays, 1);
    }

    #[test]
    fn interaction_without_armed_retry_is_ignored() {
        let mut player = FakePlayer::new(0);
        let mut unlock = AudioUnlock::new();
        unlock.user_interaction(&mut player);
        assert_eq!(player.plays, 0);
        assert!(!unlock.is_playing());
    }

    #[test]
    fn retry_rejected_again_still_disarms() {
        let mut player = FakePlayer::new(2);
        let mut unlock = AudioUnlock::new();
        unlock.attempt_autoplay(&mut player);
        unlock.user_interaction(&mut player);
        assert!(!unlock.is_playing());
        assert!(!unlock.is_deferred());
    }

    #[test]
    fn toggle_pauses_and_resumes() {
        let mut player = FakePlayer::new(0);
        let mut unlock = AudioUnlock::new();
        unlock.attempt_autoplay(&mut player);

        unlock.toggle(&mut player);
        assert!(!unlock.is_playing());
        assert_eq!(player.pauses, 1);

        unlock.toggle(&mut player);
        assert!(unlock.is_playing());
        assert_eq!(player.plays, 2);
    }
}
