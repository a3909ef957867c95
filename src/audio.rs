/// Audio cue playback.
///
/// The simulation only reports cues; a `CueSink` decides what to do with
/// them.  The terminal build has no mixer, so it rings the bell for the
/// cues worth hearing and honours a mute toggle.

use std::io::Write;

use crossterm::{style::Print, QueueableCommand};

use crate::events::AudioCue;

pub trait CueSink {
    fn play(&mut self, cue: AudioCue);

    fn set_muted(&mut self, muted: bool);

    fn is_muted(&self) -> bool;

    fn toggle_mute(&mut self) -> bool {
        let muted = !self.is_muted();
        self.set_muted(muted);
        muted
    }
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct SilentSink {
    muted: bool,
}

impl CueSink for SilentSink {
    fn play(&mut self, _cue: AudioCue) {}

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Rings the terminal bell on hits and game over.  Gunfire and kills are
/// too frequent for a bell and stay silent.
pub struct TerminalBell<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out, muted: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn rings_for(cue: AudioCue) -> bool {
        matches!(cue, AudioCue::PlayerHit | AudioCue::GameOver)
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue) {
        if self.muted || !Self::rings_for(cue) {
            return;
        }
        let rung = self
            .out
            .queue(Print('\u{7}'))
            .and_then(|out| out.flush());
        if let Err(e) = rung {
            log::warn!("audio cue {:?} failed: {}", cue, e);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
