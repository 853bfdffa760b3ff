//! Pure countdown state machine for the ring timer.
//! Kept free of DOM access so every transition is testable on the host.

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

/// Units shown on one full revolution of each progress ring.
pub mod dial {
    pub const HOURS: u32 = 24;
    pub const MINUTES: u32 = 60;
    pub const SECONDS: u32 = 60;
}

const SECS_PER_HOUR: u32 = 3600;
const SECS_PER_MINUTE: u32 = 60;

// Digits-only input pattern shared by the three time fields
static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Identifies which of the three time inputs a value targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hour,
    Minute,
    Second,
}

impl Field {
    /// Units on a full revolution of this field's ring.
    pub fn dial_max(self) -> u32 {
        match self {
            Field::Hour => dial::HOURS,
            Field::Minute => dial::MINUTES,
            Field::Second => dial::SECONDS,
        }
    }
}

/// Whether the countdown is currently ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time remains; the countdown keeps running.
    Counting,
    /// The countdown hit zero and stopped. `alert` carries the sound
    /// preference at the moment of expiry.
    Expired { alert: bool },
}

/// Parse raw field input. `None` when the text is not purely decimal digits
/// or does not fit the value type.
pub fn parse_field_input(raw: &str) -> Option<u32> {
    if !DIGITS_REGEX.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

/// Split a seconds total into canonical (hours, minutes, seconds), with
/// minutes and seconds in `[0, 59]` and hours unbounded.
pub fn decompose(total: u32) -> (u32, u32, u32) {
    let hours = total / SECS_PER_HOUR;
    let rest = total % SECS_PER_HOUR;
    (hours, rest / SECS_PER_MINUTE, rest % SECS_PER_MINUTE)
}

/// Countdown state: the three entered time components, the run flag, and the
/// alert preference. The remaining total is always re-derived from the
/// components rather than tracked separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub run_state: RunState,
    pub alert_enabled: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            run_state: RunState::Idle,
            alert_enabled: true,
        }
    }
}

impl Countdown {
    /// Total remaining time in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.hours * SECS_PER_HOUR + self.minutes * SECS_PER_MINUTE + self.seconds
    }

    pub fn field_value(&self, field: Field) -> u32 {
        match field {
            Field::Hour => self.hours,
            Field::Minute => self.minutes,
            Field::Second => self.seconds,
        }
    }

    /// Replace one component from raw input text. Anything that is not a
    /// pure decimal digit string fitting the value type is rejected without
    /// touching the state. An accepted edit always stops a running countdown.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        let Some(value) = parse_field_input(raw) else {
            debug!("rejected {:?} input {:?}", field, raw);
            return;
        };
        self.run_state = RunState::Idle;
        match field {
            Field::Hour => self.hours = value,
            Field::Minute => self.minutes = value,
            Field::Second => self.seconds = value,
        }
    }

    /// Flip between Idle and Running. Starting an empty timer is a no-op.
    pub fn toggle_run(&mut self) {
        if self.total_seconds() == 0 {
            debug!("ignoring start request for empty timer");
            return;
        }
        self.run_state = match self.run_state {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        };
    }

    /// Zero the countdown and stop it. The alert preference is untouched.
    pub fn reset(&mut self) {
        self.hours = 0;
        self.minutes = 0;
        self.seconds = 0;
        self.run_state = RunState::Idle;
    }

    pub fn set_alert(&mut self, enabled: bool) {
        self.alert_enabled = enabled;
    }

    /// Advance by one second. The new total is decomposed back into all
    /// three components in one place, so the fields can never drift apart
    /// or mis-carry across unit boundaries.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(remaining) = self.total_seconds().checked_sub(1) else {
            info!("countdown expired");
            self.reset();
            return TickOutcome::Expired {
                alert: self.alert_enabled,
            };
        };

        let (hours, minutes, seconds) = decompose(remaining);
        self.hours = hours;
        self.minutes = minutes;
        self.seconds = seconds;
        TickOutcome::Counting
    }

    /// Progress-arc angle for one ring. Each ring tracks its own unit's
    /// current value against a full revolution, so the arc snaps back every
    /// time the unit rolls over.
    pub fn ring_degrees(&self, field: Field) -> u32 {
        let value = self.field_value(field);
        if value == 0 {
            0
        } else {
            // Widened so unbounded hour values cannot overflow the product
            (u64::from(value) * 360 / u64::from(field.dial_max())) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(total: u32) -> Countdown {
        let (hours, minutes, seconds) = decompose(total);
        Countdown {
            hours,
            minutes,
            seconds,
            ..Countdown::default()
        }
    }

    #[test]
    fn decompose_recombine_round_trip() {
        for total in [0, 1, 59, 60, 61, 3599, 3600, 3661, 86_399, 86_400, 359_999] {
            let (h, m, s) = decompose(total);
            assert!(m < 60 && s < 60);
            assert_eq!(h * 3600 + m * 60 + s, total);
        }
    }

    #[test]
    fn tick_at_zero_expires_with_alert() {
        let mut countdown = with_total(0);
        countdown.run_state = RunState::Running;
        assert_eq!(countdown.tick(), TickOutcome::Expired { alert: true });
        assert_eq!(countdown.run_state, RunState::Idle);
        assert_eq!(countdown.total_seconds(), 0);
    }

    #[test]
    fn tick_at_zero_respects_muted_alert() {
        let mut countdown = with_total(0);
        countdown.set_alert(false);
        countdown.run_state = RunState::Running;
        assert_eq!(countdown.tick(), TickOutcome::Expired { alert: false });
    }

    #[test]
    fn toggle_run_on_empty_timer_is_a_no_op() {
        let mut countdown = Countdown::default();
        countdown.toggle_run();
        assert_eq!(countdown.run_state, RunState::Idle);
    }

    #[test]
    fn toggle_run_flips_between_idle_and_running() {
        let mut countdown = with_total(90);
        countdown.toggle_run();
        assert_eq!(countdown.run_state, RunState::Running);
        countdown.toggle_run();
        assert_eq!(countdown.run_state, RunState::Idle);
    }

    #[test]
    fn set_field_stops_a_running_countdown() {
        let mut countdown = with_total(3600);
        countdown.run_state = RunState::Running;
        countdown.set_field(Field::Hour, "12");
        assert_eq!(countdown.run_state, RunState::Idle);
        assert_eq!(
            (countdown.hours, countdown.minutes, countdown.seconds),
            (12, 0, 0)
        );
        assert_eq!(countdown.total_seconds(), 12 * 3600);
    }

    #[test]
    fn rejected_input_changes_nothing() {
        let mut countdown = with_total(125);
        countdown.run_state = RunState::Running;
        let before = countdown.clone();
        for raw in ["ab", "1a", "", " 5", "5 ", "-3", "1.5", "+2"] {
            countdown.set_field(Field::Minute, raw);
            assert_eq!(countdown, before, "input {:?} should be rejected", raw);
        }
    }

    #[test]
    fn overflowing_digit_input_is_rejected() {
        let mut countdown = Countdown::default();
        countdown.set_field(Field::Second, "99999999999999999999");
        assert_eq!(countdown, Countdown::default());
    }

    #[test]
    fn reset_zeroes_and_stops_but_keeps_alert_preference() {
        let mut countdown = with_total(4000);
        countdown.set_alert(false);
        countdown.run_state = RunState::Running;
        countdown.reset();
        assert_eq!(countdown.total_seconds(), 0);
        assert_eq!(countdown.run_state, RunState::Idle);
        assert!(!countdown.alert_enabled);
    }

    #[test]
    fn five_second_run_counts_down_then_expires() {
        let mut countdown = with_total(5);
        countdown.toggle_run();
        for expected in (0..5).rev() {
            assert_eq!(countdown.tick(), TickOutcome::Counting);
            assert_eq!(countdown.total_seconds(), expected);
            assert_eq!(countdown.run_state, RunState::Running);
        }
        assert_eq!(countdown.tick(), TickOutcome::Expired { alert: true });
        assert_eq!(countdown.run_state, RunState::Idle);
        assert_eq!(countdown.total_seconds(), 0);
    }

    #[test]
    fn tick_renormalizes_out_of_range_entries() {
        let mut countdown = Countdown::default();
        countdown.set_field(Field::Minute, "99");
        countdown.toggle_run();
        assert_eq!(countdown.tick(), TickOutcome::Counting);
        assert_eq!(
            (countdown.hours, countdown.minutes, countdown.seconds),
            (1, 38, 59)
        );
        assert_eq!(countdown.total_seconds(), 99 * 60 - 1);
    }

    #[test]
    fn ring_degrees_follow_per_field_dials() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.ring_degrees(Field::Hour), 0);
        countdown.set_field(Field::Minute, "30");
        assert_eq!(countdown.ring_degrees(Field::Minute), 180);
        countdown.set_field(Field::Second, "59");
        assert_eq!(countdown.ring_degrees(Field::Second), 354);
        countdown.set_field(Field::Hour, "6");
        assert_eq!(countdown.ring_degrees(Field::Hour), 90);
    }

    #[test]
    fn parse_field_input_accepts_only_digit_strings() {
        assert_eq!(parse_field_input("07"), Some(7));
        assert_eq!(parse_field_input("0"), Some(0));
        assert_eq!(parse_field_input("120"), Some(120));
        assert_eq!(parse_field_input(""), None);
        assert_eq!(parse_field_input("ab"), None);
        assert_eq!(parse_field_input("+5"), None);
        assert_eq!(parse_field_input("5 "), None);
    }
}
