//! Fixed-cadence tick scheduling.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand::RngCore;

use crate::{PixelSink, Renderer};

/// Default tick cadence.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// An effect frame was rendered during this tick.
    pub rendered: bool,
    /// The frame was pushed to the sink.
    pub shown: bool,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler that drives the engine without async.
///
/// This scheduler:
/// - Ticks the renderer at a fixed cadence with drift correction
/// - Flushes the frame to the sink whenever the effect asks for it
/// - Returns timing info so the caller can sleep appropriately
///
/// Effects pick their own frame rate; the tick cadence only bounds how
/// responsive they can be.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::init(renderer, sink)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now))?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    S: PixelSink,
    R: RngCore,
    const MAX_LEDS: usize,
    const CONTROL_CHANNEL_SIZE: usize,
> {
    sink: S,
    renderer: Renderer<'a, R, MAX_LEDS, CONTROL_CHANNEL_SIZE>,
    next_tick: Instant,
    tick_interval: Duration,
}

impl<'a, S: PixelSink, R: RngCore, const MAX_LEDS: usize, const CONTROL_CHANNEL_SIZE: usize>
    FrameScheduler<'a, S, R, MAX_LEDS, CONTROL_CHANNEL_SIZE>
{
    /// Bind the renderer to a sink, blank the strip and start the engine.
    ///
    /// The strip length is clamped to what the sink can address. Uses
    /// [`DEFAULT_TICK_INTERVAL`] for pacing.
    pub fn init(
        renderer: Renderer<'a, R, MAX_LEDS, CONTROL_CHANNEL_SIZE>,
        sink: S,
    ) -> Result<Self, S::Error> {
        Self::with_tick_interval(renderer, sink, DEFAULT_TICK_INTERVAL)
    }

    /// Same as [`Self::init`] with a custom tick cadence.
    pub fn with_tick_interval(
        mut renderer: Renderer<'a, R, MAX_LEDS, CONTROL_CHANNEL_SIZE>,
        mut sink: S,
        tick_interval: Duration,
    ) -> Result<Self, S::Error> {
        let led_count = renderer.led_count().min(sink.pixel_count());
        renderer.init(led_count);
        sink.clear()?;
        renderer.start();

        Ok(Self {
            sink,
            renderer,
            next_tick: Instant::from_millis(0),
            tick_interval,
        })
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Ticks the renderer
    /// 3. Flushes the frame to the sink if the effect asked for it
    /// 4. Returns the deadline for the next tick
    ///
    /// A sink failure is returned after the engine state has advanced, so
    /// the failed frame is dropped and the next tick proceeds normally.
    pub fn tick(&mut self, now: Instant) -> Result<TickResult, S::Error> {
        // Skip the backlog instead of bursting after a long stall
        let max_drift = self.tick_interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift {
            self.next_tick = now;
        }

        let outcome = self.renderer.tick(now);

        self.next_tick += self.tick_interval;

        if outcome.shown {
            if let Err(err) = self.renderer.flush(&mut self.sink) {
                #[cfg(feature = "esp32-log")]
                println!("[FrameScheduler.tick] sink flush failed");
                return Err(err);
            }
        }

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(TickResult {
            rendered: outcome.rendered,
            shown: outcome.shown,
            next_deadline: self.next_tick,
            sleep_duration,
        })
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, R, MAX_LEDS, CONTROL_CHANNEL_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, R, MAX_LEDS, CONTROL_CHANNEL_SIZE> {
        &mut self.renderer
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
