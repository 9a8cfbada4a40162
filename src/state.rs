//! Climate-control state shown on the display.
//!
//! One [`HvacState`] exists for the life of the process. It is owned by the
//! [`Application`](crate::app::Application) and read by the panels on every
//! redraw. The state itself has no side effects: adjustments return whether
//! anything changed, and the caller decides what to log and redraw.
//!
//! # Saturation
//!
//! Fan speed and set temperature saturate at their bounds. An adjustment that
//! would leave the range is reported as "unchanged" rather than clamped after
//! the fact, so a saturated press produces no bus message and no redraw.
//!
//! # Set Temperature Representation
//!
//! [`SetTemp`] stores the temperature as a count of half degrees. Every value
//! it can hold is a multiple of 0.5°C inside [16.0, 32.0], so the invariant
//! holds by construction rather than by rounding floats.

// =============================================================================
// Bounds and Defaults
// =============================================================================

/// Highest fan speed (all eight bar segments lit).
pub const FAN_SPEED_MAX: u8 = 8;

/// Lowest fan speed.
pub const FAN_SPEED_MIN: u8 = 0;

/// Set-temperature lower bound in half degrees (16.0°C).
const SET_TEMP_MIN_HALVES: u8 = 32;

/// Set-temperature upper bound in half degrees (32.0°C).
const SET_TEMP_MAX_HALVES: u8 = 64;

// =============================================================================
// Set Temperature
// =============================================================================

/// Cabin set temperature in 0.5°C steps, always within [16.0, 32.0].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetTemp(u8);

impl SetTemp {
    /// Lowest selectable temperature.
    pub const MIN: Self = Self(SET_TEMP_MIN_HALVES);

    /// Highest selectable temperature.
    pub const MAX: Self = Self(SET_TEMP_MAX_HALVES);

    /// Build from degrees Celsius, rounding to the nearest half degree and
    /// clamping into range. NaN gives the startup default.
    pub fn from_celsius(celsius: f32) -> Self {
        if celsius.is_nan() {
            return Self::default();
        }
        // Saturating cast: infinities land on the i32 bounds before the clamp
        let halves = ((celsius * 2.0).round() as i32).clamp(i32::from(SET_TEMP_MIN_HALVES), i32::from(SET_TEMP_MAX_HALVES));
        Self(halves as u8)
    }

    /// Temperature in degrees Celsius.
    #[inline]
    pub fn celsius(self) -> f32 { f32::from(self.0) * 0.5 }

    /// One half degree warmer, or `None` at the upper bound.
    #[inline]
    pub const fn raised(self) -> Option<Self> {
        if self.0 < SET_TEMP_MAX_HALVES { Some(Self(self.0 + 1)) } else { None }
    }

    /// One half degree cooler, or `None` at the lower bound.
    #[inline]
    pub const fn lowered(self) -> Option<Self> {
        if self.0 > SET_TEMP_MIN_HALVES { Some(Self(self.0 - 1)) } else { None }
    }
}

impl Default for SetTemp {
    fn default() -> Self { Self(47) }
}

// =============================================================================
// Clock Time
// =============================================================================

/// Hours and minutes copied from the wall clock on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
    /// Hour of day, 0-23.
    pub hours: u8,
    /// Minute of hour, 0-59.
    pub minutes: u8,
}

impl ClockTime {
    /// Build a clock time, wrapping out-of-range input into the valid ranges.
    pub const fn new(
        hours: u8,
        minutes: u8,
    ) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
        }
    }
}

// =============================================================================
// HVAC State
// =============================================================================

/// Simulated climate-control state.
#[derive(Clone, Debug, PartialEq)]
pub struct HvacState {
    /// Requested cabin temperature.
    pub set_temp: SetTemp,
    /// Outside temperature in °C. Display-only; nothing in the UI changes it.
    pub outside_temp: i8,
    /// Blower speed, `FAN_SPEED_MIN..=FAN_SPEED_MAX`.
    pub fan_speed: u8,
    pub ac_on: bool,
    pub auto_mode: bool,
    pub front_defrost: bool,
    pub rear_defrost: bool,
    pub hours: u8,
    pub minutes: u8,
}

impl HvacState {
    /// State shown at startup: 23.5°C set, -12°C outside, fan 5, A/C off,
    /// auto on, both defrosts on, 13:28.
    pub const fn new() -> Self {
        Self {
            set_temp: SetTemp(47),
            outside_temp: -12,
            fan_speed: 5,
            ac_on: false,
            auto_mode: true,
            front_defrost: true,
            rear_defrost: true,
            hours: 13,
            minutes: 28,
        }
    }

    /// Raise the fan one step. Returns `false` if already at maximum.
    pub const fn fan_up(&mut self) -> bool {
        if self.fan_speed >= FAN_SPEED_MAX {
            return false;
        }
        self.fan_speed += 1;
        true
    }

    /// Lower the fan one step. Returns `false` if already at minimum.
    pub const fn fan_down(&mut self) -> bool {
        if self.fan_speed <= FAN_SPEED_MIN {
            return false;
        }
        self.fan_speed -= 1;
        true
    }

    /// Raise the set temperature by 0.5°C. Returns `false` at 32.0°C.
    pub const fn temp_up(&mut self) -> bool {
        match self.set_temp.raised() {
            Some(t) => {
                self.set_temp = t;
                true
            }
            None => false,
        }
    }

    /// Lower the set temperature by 0.5°C. Returns `false` at 16.0°C.
    pub const fn temp_down(&mut self) -> bool {
        match self.set_temp.lowered() {
            Some(t) => {
                self.set_temp = t;
                true
            }
            None => false,
        }
    }

    /// Overwrite the clock fields.
    pub const fn set_clock(
        &mut self,
        time: ClockTime,
    ) {
        self.hours = time.hours;
        self.minutes = time.minutes;
    }

    /// Current clock fields as a [`ClockTime`].
    #[inline]
    pub const fn clock(&self) -> ClockTime { ClockTime::new(self.hours, self.minutes) }
}

impl Default for HvacState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
