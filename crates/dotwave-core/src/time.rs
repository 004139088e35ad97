//! Wall-clock sampling behind an injectable seam.

/// A wall-clock reading taken once per frame and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSample {
    /// Hour of day, 0-23.
    pub hours: u32,
    /// Minute of hour, 0-59.
    pub minutes: u32,
    /// Second of minute, 0-59.
    pub seconds: u32,
    /// Sub-second milliseconds, 0-999.
    pub millis: u32,
    /// Milliseconds since the Unix epoch; drives scheduling and noise seeds.
    pub epoch_millis: u64,
}

impl ClockSample {
    pub fn new(hours: u32, minutes: u32, seconds: u32, millis: u32, epoch_millis: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            millis,
            epoch_millis,
        }
    }

    /// Seconds with the sub-second fraction folded in.
    pub fn seconds_f(&self) -> f64 {
        f64::from(self.seconds) + f64::from(self.millis) / 1000.0
    }

    /// Minutes with fractional seconds folded in.
    pub fn minutes_f(&self) -> f64 {
        f64::from(self.minutes) + self.seconds_f() / 60.0
    }

    /// Hours on a 12-hour dial with fractional minutes folded in.
    pub fn hours12_f(&self) -> f64 {
        f64::from(self.hours % 12) + self.minutes_f() / 60.0
    }

    /// Continuously advancing scalar driving the wave animation.
    pub fn phase(&self) -> f64 {
        self.seconds_f() * 0.9 + self.minutes_f() * 0.12 + self.hours12_f() * 0.03
    }

    /// Whole seconds since the Unix epoch; the noise seed advances with this.
    pub fn epoch_seconds(&self) -> u64 {
        self.epoch_millis / 1000
    }
}

/// Source of wall-clock readings.
///
/// The binary samples the real clock; tests inject fixed readings so
/// schedules and frames can be checked without waiting on real time.
pub trait TimeSource {
    fn sample(&self) -> ClockSample;
}
