use thiserror::Error;

use crate::structs::TimeOfDay;

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Everything that can go wrong between raw records and a built
/// [`crate::Timetable`]. Every variant is fatal to the run: the caller
/// must not write any output once one of these surfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("row {row}: time `{text}` is missing the `:` separator, expected HH:MM")]
    MalformedTime { row: usize, text: String },

    #[error("row {row}: `{text}` is not an integer between 0 and 255")]
    InvalidNumber { row: usize, text: String },

    #[error("row {row}: expected at least 3 fields (start, end, name), found {found}")]
    MalformedRow { row: usize, found: usize },

    #[error("schedule contains no entries after the header row")]
    EmptySchedule,

    #[error("entry {entry}: slot {start} - {end} is out of chronological order")]
    OutOfOrder {
        entry: usize,
        start: TimeOfDay,
        end: TimeOfDay,
    },
}
