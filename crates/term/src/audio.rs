//! Audio cue sinks.
//!
//! The core only emits [`AudioCue`]s; what they sound like is up to the sink.
//! Playback must never stall or fail a frame, so sinks swallow their errors.

use std::io::Write;

use crate::core::FrameEvents;
use crate::types::AudioCue;

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);

    /// Play every cue a frame produced, in order.
    fn play_frame(&mut self, events: &FrameEvents) {
        for cue in &events.cues {
            self.play(*cue);
        }
    }
}

/// Silent sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Rings the terminal bell (BEL) for every cue.
///
/// Most terminals collapse rapid bells into one, which matches the "at most
/// one sound per kind per frame" rule well enough.
#[derive(Debug)]
pub struct BellAudio<W: Write> {
    out: W,
    rung: u64,
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W) -> Self {
        Self { out, rung: 0 }
    }

    pub fn rung(&self) -> u64 {
        self.rung
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, _cue: AudioCue) {
        if self.out.write_all(b"\x07").and_then(|_| self.out.flush()).is_ok() {
            self.rung += 1;
        }
    }
}

/// Records cues instead of playing them (tests, headless runs).
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub played: Vec<AudioCue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.played.push(cue);
    }
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue);
    }
}
