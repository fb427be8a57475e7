//! Frame timing: clock, FPS measurement, and frame pacing

use std::time::{Duration, Instant};

use crate::settings::FpsCap;

/// Frame timing snapshot
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Monotonic timestamp taken at the tick
    pub now: Instant,
    /// Monotonic frame counter
    pub frame_index: u64,
}

/// Frame clock producing [`FrameTime`] snapshots.
///
/// Delta time is clamped so a debugger pause or long stall cannot feed a
/// pathological dt into the sim.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Resets the clock baseline, e.g. after a suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of frame timestamps the FPS counter averages over
const FPS_WINDOW: usize = 60;

/// Rolling FPS counter over the last [`FPS_WINDOW`] frames.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frames: [Option<Instant>; FPS_WINDOW],
    index: usize,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: [None; FPS_WINDOW],
            index: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp and update the rolling average.
    pub fn record(&mut self, now: Instant) {
        self.frames[self.index] = Some(now);
        self.index = (self.index + 1) % FPS_WINDOW;

        // Oldest slot is the one the ring will overwrite next
        if let Some(oldest) = self.frames[self.index] {
            let elapsed = now.saturating_duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW as f64 - 1.0) / elapsed).round() as u32;
            }
        }
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame time budget for a cap, or `None` when uncapped.
pub fn frame_budget(cap: &FpsCap) -> Option<Duration> {
    cap.current().map(|limit| Duration::from_secs_f64(1.0 / f64::from(limit)))
}

/// Sleep off whatever remains of the frame budget since `frame_start`.
pub fn pace(frame_start: Instant, cap: &FpsCap) {
    if let Some(budget) = frame_budget(cap) {
        let spent = frame_start.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_clamps_dt() {
        let mut clock = FrameClock::new();
        // Immediate tick: dt is clamped up to the minimum, never zero
        let ft = clock.tick();
        assert!(ft.dt > 0.0);
        assert!(ft.dt <= 0.25);
        assert_eq!(ft.frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[test]
    fn test_fps_counter_steady_rate() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        // Simulate a steady 100 Hz feed
        for i in 0..FPS_WINDOW * 2 {
            counter.record(start + Duration::from_millis(10 * i as u64));
        }
        let fps = counter.fps();
        assert!((95..=105).contains(&fps), "got {}", fps);
    }

    #[test]
    fn test_fps_counter_warmup_is_zero() {
        let counter = FpsCounter::new();
        assert_eq!(counter.fps(), 0);
    }

    #[test]
    fn test_frame_budget() {
        let cap = FpsCap::new(50);
        assert_eq!(frame_budget(&cap), Some(Duration::from_millis(20)));

        let mut uncapped = FpsCap::new(50);
        uncapped.toggle();
        assert_eq!(frame_budget(&uncapped), None);
    }

    #[test]
    fn test_pace_sleeps_toward_budget() {
        let cap = FpsCap::new(100); // 10ms budget
        let start = Instant::now();
        pace(start, &cap);
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
