/// Monotonic engine time in seconds.
///
/// This is not wall-clock time: it only advances when a host feeds frame
/// deltas, which keeps timer behavior replayable.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Time(pub f64);

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn seconds(self) -> f64 {
        self.0
    }

    /// The instant `secs` seconds after `self`.
    pub fn after(self, secs: f64) -> Time {
        Time(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self`, never negative.
    pub fn since(self, earlier: Time) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }

    /// The later of two instants.
    pub fn max(self, other: Time) -> Time {
        if other.0 > self.0 { other } else { self }
    }
}
