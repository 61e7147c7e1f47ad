//! Looping progress driver
//!
//! A deterministic clock producing the normalized progress that every bone
//! interpolation is keyed on. Each cycle runs from 0 to 1 over `duration_ms`.
//! On completion the clock restarts; in boomerang mode the next cycle runs
//! back from 1 to 0 instead of jumping to 0.
//!
//! The host calls [`ProgressDriver::tick`] with frame deltas:
//!
//! ```rust
//! use bones_animation::ProgressDriver;
//!
//! let mut driver = ProgressDriver::new(1000).boomerang(true);
//! driver.tick(250.0);
//! assert!((driver.progress() - 0.25).abs() < 1e-6);
//!
//! driver.tick(1000.0);
//! assert!((driver.progress() - 0.75).abs() < 1e-6);
//! ```

use crate::easing::Easing;

/// Tick-driven looping clock in `[0, 1]`
#[derive(Clone, Debug)]
pub struct ProgressDriver {
    /// Cycle length in milliseconds (never zero)
    duration_ms: u32,
    /// Reverse direction at the end of each cycle instead of restarting
    boomerang: bool,
    easing: Easing,
    /// Time spent in the current cycle
    elapsed_ms: f32,
    /// Current cycle runs from 1 back to 0
    reversed: bool,
    playing: bool,
}

impl ProgressDriver {
    /// Create a running driver with the given cycle duration
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            boomerang: false,
            easing: Easing::Linear,
            elapsed_ms: 0.0,
            reversed: false,
            playing: true,
        }
    }

    /// Enable or disable boomerang cycles (builder pattern)
    pub fn boomerang(mut self, boomerang: bool) -> Self {
        self.boomerang = boomerang;
        self
    }

    /// Set the easing curve (builder pattern)
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start paused instead of running (builder pattern)
    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn is_boomerang(&self) -> bool {
        self.boomerang
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// (Re)start from progress 0
    ///
    /// Restarting never resumes a previous position.
    pub fn start(&mut self) {
        self.reset();
        self.playing = true;
    }

    /// Stop and reset to progress 0
    pub fn stop(&mut self) {
        self.reset();
        self.playing = false;
    }

    /// Start or stop to match `active`, leaving a matching state untouched
    pub fn set_active(&mut self, active: bool) {
        if active && !self.playing {
            self.start();
        } else if !active && self.playing {
            self.stop();
        }
    }

    fn reset(&mut self) {
        self.elapsed_ms = 0.0;
        self.reversed = false;
    }

    /// Advance by `dt_ms` milliseconds and return the new progress
    ///
    /// Deltas spanning several cycles wrap correctly, flipping direction once
    /// per completed cycle in boomerang mode. Negative or non-finite deltas
    /// are ignored.
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        if !self.playing || !dt_ms.is_finite() || dt_ms <= 0.0 {
            return self.progress();
        }

        let duration = self.duration_ms as f32;
        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= duration {
            let cycles = (self.elapsed_ms / duration).floor();
            self.elapsed_ms -= cycles * duration;
            // Guard against float residue landing exactly on the boundary
            if self.elapsed_ms >= duration {
                self.elapsed_ms = 0.0;
            }
            if self.boomerang && cycles % 2.0 == 1.0 {
                self.reversed = !self.reversed;
            }
            tracing::trace!(cycles, reversed = self.reversed, "progress cycle completed");
        }

        self.progress()
    }

    /// Current eased progress; always 0 while stopped
    pub fn progress(&self) -> f32 {
        if !self.playing {
            return 0.0;
        }
        let t = self.elapsed_ms / self.duration_ms as f32;
        let eased = self.easing.apply(t);
        if self.reversed {
            1.0 - eased
        } else {
            eased
        }
    }
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::new(1200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_cycle_restarts_at_zero() {
        let mut driver = ProgressDriver::new(1000);
        assert_eq!(driver.progress(), 0.0);

        driver.tick(500.0);
        assert!((driver.progress() - 0.5).abs() < 1e-6);

        // Completing the cycle snaps back to the start
        driver.tick(500.0);
        assert_eq!(driver.progress(), 0.0);

        driver.tick(100.0);
        assert!((driver.progress() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_boomerang_reverses() {
        let mut driver = ProgressDriver::new(100).boomerang(true);

        driver.tick(100.0);
        assert_eq!(driver.progress(), 1.0);

        driver.tick(25.0);
        assert!((driver.progress() - 0.75).abs() < 1e-6);

        driver.tick(75.0);
        assert_eq!(driver.progress(), 0.0);

        driver.tick(40.0);
        assert!((driver.progress() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_large_delta_wraps() {
        let mut driver = ProgressDriver::new(100).boomerang(true);
        // Three full cycles: ends on a reversed leg
        driver.tick(330.0);
        assert!((driver.progress() - 0.7).abs() < 1e-4);

        let mut plain = ProgressDriver::new(100);
        plain.tick(1030.0);
        assert!((plain.progress() - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_progress_stays_in_unit_interval() {
        let mut driver = ProgressDriver::new(16).boomerang(true).easing(Easing::EaseInOut);
        for step in 0..500 {
            let p = driver.tick(1.0 + (step % 7) as f32);
            assert!((0.0..=1.0).contains(&p), "progress {} out of range", p);
        }
    }

    #[test]
    fn test_stop_resets_and_restart_begins_at_zero() {
        let mut driver = ProgressDriver::new(1000);
        driver.tick(600.0);
        driver.stop();
        assert_eq!(driver.progress(), 0.0);

        // Ticking while stopped does nothing
        driver.tick(300.0);
        assert_eq!(driver.progress(), 0.0);

        driver.start();
        assert_eq!(driver.progress(), 0.0);
        driver.tick(100.0);
        assert!((driver.progress() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_set_active_is_idempotent() {
        let mut driver = ProgressDriver::new(1000);
        driver.tick(300.0);
        driver.set_active(true);
        assert!((driver.progress() - 0.3).abs() < 1e-6);

        driver.set_active(false);
        assert!(!driver.is_playing());
        driver.set_active(true);
        assert_eq!(driver.progress(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_clamped() {
        let mut driver = ProgressDriver::new(0);
        assert_eq!(driver.duration_ms(), 1);
        let p = driver.tick(0.5);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut driver = ProgressDriver::new(100);
        driver.tick(50.0);
        driver.tick(-20.0);
        driver.tick(f32::NAN);
        assert!((driver.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_paused_builder() {
        let mut driver = ProgressDriver::new(100).paused();
        assert_eq!(driver.tick(50.0), 0.0);
        driver.start();
        assert!((driver.tick(50.0) - 0.5).abs() < 1e-6);
    }
}
