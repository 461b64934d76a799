use crate::error::{Result, ScheduleError};
use crate::structs::{ScheduleEntry, TimeOfDay};

/// Parses raw CSV records into an ordered schedule.
///
/// The first record is the header and is discarded; every following
/// record must carry at least `start,end,name`. Row order is preserved.
/// Times are `H:MM`/`HH:MM` with each component a non-negative integer
/// fitting in a byte. No further range check is applied: `"25:99"` is
/// accepted structurally, matching the format this overlay has always
/// consumed.
pub fn parse_schedule<S: AsRef<str>>(records: &[Vec<S>]) -> Result<Vec<ScheduleEntry>> {
    records
        .iter()
        .enumerate()
        .skip(1)
        .map(|(idx, record)| parse_row(record, idx + 1))
        .collect()
}

fn parse_row<S: AsRef<str>>(record: &[S], row: usize) -> Result<ScheduleEntry> {
    let [start, end, name, ..] = record else {
        return Err(ScheduleError::MalformedRow {
            row,
            found: record.len(),
        });
    };

    Ok(ScheduleEntry {
        start: parse_time(start.as_ref(), row)?,
        end: parse_time(end.as_ref(), row)?,
        name: name.as_ref().to_string(),
    })
}

fn parse_time(text: &str, row: usize) -> Result<TimeOfDay> {
    let Some((hour, minute)) = text.split_once(':') else {
        return Err(ScheduleError::MalformedTime {
            row,
            text: text.to_string(),
        });
    };

    Ok(TimeOfDay::new(
        parse_component(hour, row)?,
        parse_component(minute, row)?,
    ))
}

fn parse_component(text: &str, row: usize) -> Result<u8> {
    text.parse().map_err(|_| ScheduleError::InvalidNumber {
        row,
        text: text.to_string(),
    })
}
