/// Transport state of the video overlay, kept separate from the
/// `<video>` element so the rules can be tested without a browser.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub open: bool,
    pub playing: bool,
    pub muted: bool,
    pub fullscreen: bool,
    pub current_time: f64,
    pub duration: f64,
}

impl PlaybackState {
    pub fn opened() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    fn known_duration(&self) -> Option<f64> {
        (self.duration.is_finite() && self.duration > 0.0).then_some(self.duration)
    }

    /// Playback position in percent; 0 until metadata has loaded.
    pub fn progress_percent(&self) -> f64 {
        match self.known_duration() {
            Some(duration) => (self.current_time / duration * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }

    pub fn metadata_loaded(self, duration: f64) -> Self {
        Self {
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            ..self
        }
    }

    /// Applies a `timeupdate`; reaching the end flips back to paused.
    pub fn time_updated(self, current_time: f64, duration: f64) -> Self {
        let next = Self {
            current_time: if current_time.is_finite() { current_time.max(0.0) } else { 0.0 },
            ..self.metadata_loaded(duration)
        };

        match next.known_duration() {
            Some(duration) if next.current_time >= duration => Self { playing: false, ..next },
            _ => next,
        }
    }

    /// Seek target in seconds for a slider value in percent.
    pub fn seek_time_for_percent(&self, percent: f64) -> f64 {
        if !percent.is_finite() {
            return self.current_time;
        }
        match self.known_duration() {
            Some(duration) => percent.clamp(0.0, 100.0) / 100.0 * duration,
            None => 0.0,
        }
    }

    pub fn seeked(self, percent: f64) -> Self {
        Self {
            current_time: self.seek_time_for_percent(percent),
            ..self
        }
    }

    pub fn toggled_play(self) -> Self {
        Self {
            playing: !self.playing,
            ..self
        }
    }

    pub fn toggled_mute(self) -> Self {
        Self {
            muted: !self.muted,
            ..self
        }
    }

    pub fn play_rejected(self) -> Self {
        Self {
            playing: false,
            ..self
        }
    }

    pub fn fullscreen_changed(self, fullscreen: bool) -> Self {
        Self { fullscreen, ..self }
    }

    /// Closing the dialog always stops playback.
    pub fn closed(self) -> Self {
        Self {
            open: false,
            playing: false,
            fullscreen: false,
            ..self
        }
    }

    pub fn time_label(&self) -> String {
        format!("{} / {}", format_time(self.current_time), format_time(self.duration))
    }
}

/// `M:SS`; negative or non-finite input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
