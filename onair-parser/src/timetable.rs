use crate::error::{Result, ScheduleError};
use crate::structs::{DisplayEntry, ScheduleEntry, TimeOfDay, Timetable};

/// Countdown targets always land on the last second of their final
/// minute, so the displayed end stays inclusive.
const END_SECOND: u8 = 59;

/// End of the broadcast day, used by the closing entry.
const DAY_END: TimeOfDay = TimeOfDay { hour: 23, minute: 59 };

impl DisplayEntry {
    fn from_entry(entry: &ScheduleEntry) -> DisplayEntry {
        let target = entry.end.prior_minute();
        DisplayEntry {
            start_hour: entry.start.hour,
            start_minute: entry.start.minute,
            end_hour: target.hour,
            end_minute: target.minute,
            end_second: END_SECOND,
            label: entry.name.clone(),
            // The human-readable timeframe keeps the nominal end time;
            // only the countdown target moves back a minute.
            timeframe: format!("{} - {}", entry.start, entry.end),
        }
    }

    fn synthetic(start: TimeOfDay, end: TimeOfDay, timeframe: String) -> DisplayEntry {
        DisplayEntry {
            start_hour: start.hour,
            start_minute: start.minute,
            end_hour: end.hour,
            end_minute: end.minute,
            end_second: END_SECOND,
            label: String::new(),
            timeframe,
        }
    }
}

impl Timetable {
    /// Builds the display timetable from a parsed schedule.
    ///
    /// One pure pass: validates chronological order, derives the
    /// countdown fields for every slot, and wraps the body in the
    /// synthetic waiting/now-playing/closed markers. Fails with
    /// [`ScheduleError::EmptySchedule`] when there are no entries and
    /// with [`ScheduleError::OutOfOrder`] when a slot ends at or before
    /// its start or begins before the previous slot has ended.
    pub fn build(entries: &[ScheduleEntry]) -> Result<Timetable> {
        let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
            return Err(ScheduleError::EmptySchedule);
        };

        validate_order(entries)?;

        let preamble = vec![
            DisplayEntry::synthetic(
                TimeOfDay::new(0, 0),
                first.start.prior_minute(),
                format!("Start at {}", first.start),
            ),
            // Zero-duration marker carrying the start time forward to the
            // on-air banner. Not a countdown target.
            DisplayEntry::synthetic(first.start, first.start.prior_minute(), String::new()),
        ];

        let body = entries.iter().map(DisplayEntry::from_entry).collect();

        let postamble = DisplayEntry::synthetic(last.end, DAY_END, String::new());

        Ok(Timetable {
            preamble,
            body,
            postamble: Some(postamble),
        })
    }

    /// All display entries in overlay order: preamble, body, postamble.
    pub fn entries(&self) -> impl Iterator<Item = &DisplayEntry> {
        self.preamble
            .iter()
            .chain(self.body.iter())
            .chain(self.postamble.iter())
    }
}

fn validate_order(entries: &[ScheduleEntry]) -> Result<()> {
    for (idx, entry) in entries.iter().enumerate() {
        if entry.end <= entry.start {
            return Err(ScheduleError::OutOfOrder {
                entry: idx + 1,
                start: entry.start,
                end: entry.end,
            });
        }
    }

    for (idx, pair) in entries.windows(2).enumerate() {
        if pair[1].start < pair[0].end {
            return Err(ScheduleError::OutOfOrder {
                entry: idx + 2,
                start: pair[1].start,
                end: pair[1].end,
            });
        }
    }

    Ok(())
}
