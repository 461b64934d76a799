use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Wall-clock hour/minute pair as written in the input schedule.
///
/// The hour is logically 0-24: hour 24 is the sentinel produced by
/// [`TimeOfDay::prior_minute`] for a wrapped midnight boundary. Parsing
/// accepts any components that fit in a byte (see [`crate::parse_schedule`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// One minute before `self`.
    ///
    /// Used to turn a nominal end time into a countdown target that keeps
    /// the final minute of the slot inclusive. Midnight maps to the hour-24
    /// sentinel rather than 23:59, so the overlay can tell a wrapped
    /// boundary apart from a plain 23:59 of the same day.
    pub fn prior_minute(self) -> TimeOfDay {
        match (self.hour, self.minute) {
            (0, 0) => TimeOfDay::new(24, 59),
            (hour, 0) => TimeOfDay::new(hour - 1, 59),
            (hour, minute) => TimeOfDay::new(hour, minute - 1),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = format!("{}:{:02}", self.hour, self.minute);
        serializer.serialize_str(&formatted)
    }
}

/// One performer's validated slot, as parsed from a single input row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScheduleEntry {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub name: String,
}

/// A render-ready timetable row.
///
/// The numeric fields map one-to-one onto the `data-sh`/`data-sm`/
/// `data-eh`/`data-em`/`data-es` attributes the overlay's countdown
/// script reads. `end_second` is always 59: the countdown target is one
/// minute before the nominal end, at the last second of that minute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DisplayEntry {
    pub start_hour: u8,
    pub start_minute: u8,
    pub end_hour: u8,
    pub end_minute: u8,
    pub end_second: u8,
    pub label: String,
    pub timeframe: String,
}

/// The display-ready schedule: synthetic boundary markers around the
/// real slots, in overlay order.
///
/// `preamble` holds the "waiting" entry (shown from midnight until just
/// before the first slot) and the zero-duration "now playing" banner
/// marker. `postamble` holds the "closed" entry covering the rest of
/// the day after the last slot. Built once per run, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Timetable {
    pub preamble: Vec<DisplayEntry>,
    pub body: Vec<DisplayEntry>,
    pub postamble: Option<DisplayEntry>,
}
