use foundation::time::Time;

/// Frame metadata for a variable-rate animation loop.
///
/// Hosts report the elapsed time of each animation tick; the frame keeps a
/// running engine time so timers and traces stay replayable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Elapsed seconds covered by this frame (sanitized, never negative).
    pub dt_s: f64,
    /// Engine time at the end of the frame (seconds).
    pub time: Time,
}

impl Frame {
    /// The frame before any tick has been processed.
    pub fn start() -> Self {
        Self {
            index: 0,
            dt_s: 0.0,
            time: Time::ZERO,
        }
    }

    /// The next frame, `dt_s` seconds later.
    ///
    /// Negative or non-finite deltas are treated as zero so a bad host clock
    /// cannot move time backwards.
    pub fn advance(self, dt_s: f64) -> Self {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        Self {
            index: self.index + 1,
            dt_s,
            time: self.time.after(dt_s),
        }
    }

    /// Engine time at the start of the frame.
    pub fn started_at(self) -> Time {
        Time(self.time.0 - self.dt_s)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::start()
    }
}
