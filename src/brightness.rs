//! Brightness slew-rate limiter
//!
//! Moves the output brightness toward its target once per scheduler tick.
//! With the ramp disabled the target applies instantly. With the ramp
//! enabled the value follows an exponential filter, and upward moves are
//! additionally damped near zero so power-on never pops.

/// Weight of the current value in the exponential filter, in tenths
const FILTER_CURRENT_TENTHS: u16 = 6;

/// Weight of the target value in the exponential filter, in tenths
const FILTER_TARGET_TENTHS: u16 = 10 - FILTER_CURRENT_TENTHS;

/// Soft-start factor bounds, in thousandths
const SOFT_START_MIN: u32 = 100;
const SOFT_START_MAX: u32 = 1000;

/// Output brightness with slew support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRamp {
    /// Brightness applied to pixels right now
    current: u8,
    /// Brightness the ramp is moving toward
    target: u8,
    /// Brightness requested by the caller
    level: u8,
    /// Slew instead of jumping
    ramp_enabled: bool,
}

impl BrightnessRamp {
    pub const fn new(level: u8, ramp_enabled: bool) -> Self {
        Self {
            current: 0,
            target: level,
            level,
            ramp_enabled,
        }
    }

    pub const fn current(&self) -> u8 {
        self.current
    }

    pub const fn target(&self) -> u8 {
        self.target
    }

    /// Brightness last requested by the caller
    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn ramp_enabled(&self) -> bool {
        self.ramp_enabled
    }

    pub fn set_ramp_enabled(&mut self, enabled: bool) {
        self.ramp_enabled = enabled;
    }

    /// Set the caller brightness; reached through [`Self::update`]
    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        self.target = level;
    }

    /// Jump to `level` immediately, bypassing the slew
    pub fn force(&mut self, level: u8) {
        self.level = level;
        self.target = level;
        self.current = level;
    }

    /// Effect-driven brightness, applied at once
    ///
    /// The caller level is kept, so effects derive each frame's value from
    /// [`Self::level`] and repeated modulation never compounds.
    pub fn modulate(&mut self, value: u8) {
        self.target = value;
        self.current = value;
    }

    /// Point the target back at the caller level after modulation
    pub fn restore(&mut self) {
        self.target = self.level;
    }

    /// Check if the ramp has settled
    pub const fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one tick toward the target
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self) {
        if !self.ramp_enabled {
            self.current = self.target;
            return;
        }
        if self.current == self.target {
            return;
        }

        let filtered = ((u16::from(self.current) * FILTER_CURRENT_TENTHS
            + u16::from(self.target) * FILTER_TARGET_TENTHS)
            / 10) as u8;

        if self.current < self.target {
            let soft_start = (u32::from(self.current) * 4 * SOFT_START_MAX / 255)
                .clamp(SOFT_START_MIN, SOFT_START_MAX);
            let delta = (u32::from(filtered - self.current) * soft_start / SOFT_START_MAX) as u8;
            self.current += delta.max(1);
        } else {
            self.current = filtered;
        }
    }
}

impl Default for BrightnessRamp {
    fn default() -> Self {
        Self::new(0, false)
    }
}
