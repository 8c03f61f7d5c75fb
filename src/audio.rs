//! Pitch-cue playback
//!
//! The simulation only decides *which* pitch a touched planet should sound;
//! actual mixing belongs to the host. [`CuePlayer`] wraps a host-provided
//! backend and gates it: once a cue has ever started, new cues are dropped
//! while one is still sounding.

use crate::consts::PITCH_STEPS;

/// Host-side sound backend
pub trait CueBackend {
    /// Start the cue for a pitch step in `0..12`
    fn start(&mut self, pitch: u8);
    /// Whether a previously started cue is still sounding
    fn is_playing(&self) -> bool;
}

/// Rate-gated cue player
pub struct CuePlayer<B: CueBackend> {
    backend: B,
    started: bool,
}

impl<B: CueBackend> CuePlayer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            started: false,
        }
    }

    /// Play a pitch cue unless one is already sounding. The very first call
    /// always plays; pitches outside the scale wrap.
    pub fn play(&mut self, pitch: u8) {
        if self.started && self.backend.is_playing() {
            return;
        }
        self.backend.start(pitch % PITCH_STEPS);
        self.started = true;
    }
}

/// Backend that discards all cues, for headless runs
#[derive(Debug, Default)]
pub struct NullBackend;

impl CueBackend for NullBackend {
    fn start(&mut self, _pitch: u8) {}

    fn is_playing(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingBackend {
        started: Vec<u8>,
        playing: bool,
    }

    impl CueBackend for &mut RecordingBackend {
        fn start(&mut self, pitch: u8) {
            self.started.push(pitch);
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    #[test]
    fn test_first_cue_always_plays() {
        let mut backend = RecordingBackend {
            started: vec![],
            // A fresh player must not consult is_playing before anything
            // has started
            playing: true,
        };
        let mut player = CuePlayer::new(&mut backend);
        player.play(4);
        assert_eq!(backend.started, vec![4]);
    }

    #[test]
    fn test_cues_dropped_while_playing() {
        let mut backend = RecordingBackend {
            started: vec![],
            playing: false,
        };
        {
            let mut player = CuePlayer::new(&mut backend);
            player.play(2);
            player.backend.playing = true;
            player.play(7);
            player.play(9);
            player.backend.playing = false;
            player.play(11);
        }
        assert_eq!(backend.started, vec![2, 11]);
    }

    #[test]
    fn test_out_of_scale_pitch_wraps() {
        let mut backend = RecordingBackend {
            started: vec![],
            playing: false,
        };
        {
            let mut player = CuePlayer::new(&mut backend);
            player.play(13);
        }
        assert_eq!(backend.started, vec![1]);
    }
}
