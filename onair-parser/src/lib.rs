mod error;
mod parser;
mod structs;
mod timetable;

#[cfg(feature = "html")]
mod html;

pub use error::{Result, ScheduleError};
pub use parser::parse_schedule;
pub use structs::{DisplayEntry, ScheduleEntry, TimeOfDay, Timetable};
