//! Validated shift schedule and the interval classification over it.

use cultura_core::config::ScheduleConfig;

use super::state::{CompanyStatus, ShiftState};
use crate::error::ScheduleError;
use crate::time::format_hour;

/// Four boundary hours splitting the company day.
///
/// Invariant: `0 <= start < lunch_start < lunch_end < end <= 24`.
/// Only constructible through [`ShiftSchedule::new`], which enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftSchedule {
    start: f64,
    lunch_start: f64,
    lunch_end: f64,
    end: f64,
}

impl ShiftSchedule {
    /// Build a schedule, rejecting any boundary set that would overlap or
    /// invert the intervals.
    pub fn new(start: f64, lunch_start: f64, lunch_end: f64, end: f64) -> Result<Self, ScheduleError> {
        let boundaries = [
            ("start", start),
            ("lunch_start", lunch_start),
            ("lunch_end", lunch_end),
            ("end", end),
        ];

        for (field, value) in boundaries {
            if !value.is_finite() {
                return Err(ScheduleError::NonFinite { field });
            }
            if !(0.0..=24.0).contains(&value) {
                return Err(ScheduleError::OutOfRange { field, value });
            }
        }

        for pair in boundaries.windows(2) {
            let (earlier, earlier_value) = pair[0];
            let (later, later_value) = pair[1];
            if earlier_value >= later_value {
                return Err(ScheduleError::Unordered {
                    earlier,
                    earlier_value,
                    later,
                    later_value,
                });
            }
        }

        Ok(Self {
            start,
            lunch_start,
            lunch_end,
            end,
        })
    }

    /// Build a schedule from its configuration section.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        Self::new(config.start, config.lunch_start, config.lunch_end, config.end)
    }

    /// Shift start hour.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Lunch start hour.
    pub fn lunch_start(&self) -> f64 {
        self.lunch_start
    }

    /// Lunch end hour.
    pub fn lunch_end(&self) -> f64 {
        self.lunch_end
    }

    /// Shift end hour.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Place a fractional hour into its interval.
    ///
    /// Intervals are left-closed, right-open, so a value equal to a boundary
    /// belongs to the interval that starts there. Anything below `start`
    /// (negatives included) is before the shift; anything not below `end`
    /// (values past 24 and NaN included) is after it.
    pub fn classify(&self, time_val: f64) -> ShiftState {
        match time_val {
            t if t < self.start => ShiftState::BeforeShift,
            t if t < self.lunch_start => ShiftState::Morning,
            t if t < self.lunch_end => ShiftState::Lunch,
            t if t < self.end => ShiftState::Afternoon,
            _ => ShiftState::AfterShift,
        }
    }

    /// The boundary hour that ends `state`. After the shift this is the
    /// next day's start.
    pub fn next_boundary(&self, state: ShiftState) -> f64 {
        match state {
            ShiftState::BeforeShift | ShiftState::AfterShift => self.start,
            ShiftState::Morning => self.lunch_start,
            ShiftState::Lunch => self.lunch_end,
            ShiftState::Afternoon => self.end,
        }
    }

    /// Progress through `state` at `time_val`, relative to the state's own
    /// span, rounded and clamped to `0..=100`.
    pub fn progress(&self, state: ShiftState, time_val: f64) -> u8 {
        let raw = match state {
            ShiftState::BeforeShift => 0.0,
            ShiftState::Morning => span_percent(time_val, self.start, self.lunch_start),
            ShiftState::Lunch => span_percent(time_val, self.lunch_start, self.lunch_end),
            ShiftState::Afternoon => span_percent(time_val, self.lunch_end, self.end),
            ShiftState::AfterShift => 100.0,
        };
        raw.round().clamp(0.0, 100.0) as u8
    }

    /// Full company status for a fractional local hour.
    pub fn status_at(&self, time_val: f64) -> CompanyStatus {
        let state = self.classify(time_val);
        CompanyStatus {
            state,
            next_boundary_time: format_hour(self.next_boundary(state)),
            next_label_key: state.next_label_key(),
            progress_percent: self.progress(state, time_val),
            color_tag: state.color(),
        }
    }
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        Self {
            start: 9.0,
            lunch_start: 12.0,
            lunch_end: 13.0,
            end: 17.0,
        }
    }
}

fn span_percent(time_val: f64, from: f64, to: f64) -> f64 {
    (time_val - from) / (to - from) * 100.0
}
