use chrono::Duration;

/// what the audio side should do after a state change, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmCue {
    Ring,
    Silence,
}

/// the countdown itself, with no idea of how it gets displayed or ticked
///
/// `remaining` keeps counting down past zero (overtime) and is only ever
/// reset by starting a new countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
    original: Duration,
}

impl Countdown {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            remaining: timeout,
            original: timeout,
        }
    }

    /// takes one second off the countdown
    ///
    /// meant to be called once per elapsed second, forever; the cue is
    /// [`AlarmCue::Ring`] exactly when the countdown lands on zero
    pub fn tick(&mut self) -> Option<AlarmCue> {
        self.remaining = self.remaining - Duration::seconds(1);
        (self.remaining == Duration::zero()).then_some(AlarmCue::Ring)
    }

    /// adds `minutes` to the countdown
    ///
    /// the cue is [`AlarmCue::Silence`] only when this brings the countdown
    /// back to strictly more than zero
    pub fn add_minutes(&mut self, minutes: i64) -> Option<AlarmCue> {
        self.remaining = self.remaining + Duration::minutes(minutes);
        (self.remaining > Duration::zero()).then_some(AlarmCue::Silence)
    }

    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub const fn original(&self) -> Duration {
        self.original
    }

    /// the remaining time as `H:MM:SS`, prefixed with `-` in overtime and
    /// with a space otherwise
    #[must_use]
    pub fn display(&self) -> String {
        let (sign, span) = if self.remaining < Duration::zero() {
            ('-', -self.remaining)
        } else {
            (' ', self.remaining)
        };
        let seconds = span.num_seconds();
        format!(
            "{sign}{}:{:02}:{:02}",
            seconds / 3600,
            seconds / 60 % 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(start: i64, ticks: usize) -> Countdown {
        let mut countdown = Countdown::new(Duration::seconds(start));
        for _ in 0..ticks {
            countdown.tick();
        }
        countdown
    }

    #[test]
    fn ticks_count_down_one_second_each() {
        let mut countdown = Countdown::new(Duration::seconds(90));
        for _ in 0..5 {
            assert_eq!(countdown.tick(), None);
        }
        assert_eq!(countdown.remaining(), Duration::seconds(85));
        assert_eq!(countdown.original(), Duration::seconds(90));
    }

    #[test]
    fn rings_exactly_once_when_landing_on_zero() {
        let mut countdown = Countdown::new(Duration::seconds(2));
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), Some(AlarmCue::Ring));
        assert_eq!(countdown.remaining(), Duration::zero());
        // overtime keeps going without ringing again
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.remaining(), Duration::seconds(-1));
    }

    #[test]
    fn adding_time_past_zero_silences() {
        let mut countdown = ticked(20, 30);
        assert_eq!(countdown.remaining(), Duration::seconds(-10));
        assert_eq!(countdown.add_minutes(1), Some(AlarmCue::Silence));
        assert_eq!(countdown.remaining(), Duration::seconds(50));
    }

    #[test]
    fn adding_time_still_in_overtime_stays_silent() {
        let mut countdown = ticked(0, 120);
        assert_eq!(countdown.remaining(), Duration::seconds(-120));
        assert_eq!(countdown.add_minutes(1), None);
        assert_eq!(countdown.remaining(), Duration::seconds(-60));
    }

    #[test]
    fn adding_time_to_exactly_zero_stays_silent() {
        let mut countdown = ticked(0, 60);
        assert_eq!(countdown.add_minutes(1), None);
        assert_eq!(countdown.remaining(), Duration::zero());
    }

    #[test]
    fn can_ring_again_after_more_time_was_added() {
        let mut countdown = ticked(1, 1);
        let mut rings = 0;
        countdown.add_minutes(1);
        for _ in 0..60 {
            if countdown.tick() == Some(AlarmCue::Ring) {
                rings += 1;
            }
        }
        assert_eq!(rings, 1);
        assert_eq!(countdown.remaining(), Duration::zero());
    }

    #[test]
    fn display_pads_minutes_and_seconds() {
        assert_eq!(
            Countdown::new(Duration::seconds(5445)).display(),
            " 1:30:45"
        );
        assert_eq!(Countdown::new(Duration::seconds(90)).display(), " 0:01:30");
        assert_eq!(Countdown::new(Duration::zero()).display(), " 0:00:00");
    }

    #[test]
    fn display_shows_overtime_with_a_minus() {
        assert_eq!(ticked(0, 90).display(), "-0:01:30");
        assert_eq!(ticked(0, 1).display(), "-0:00:01");
    }
}
