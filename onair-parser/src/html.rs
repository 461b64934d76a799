//! Rendering of a [`Timetable`] into the HTML fragment the overlay
//! pages embed. Every display entry becomes an `<h1>`/`<h2>` pair whose
//! `data-*` attributes feed the client-side countdown script.

use crate::structs::{DisplayEntry, Timetable};

/// Banner text for the zero-duration "now playing" marker.
const ON_AIR_LABEL: &str = "ON AIR";

/// Closing message shown after the last slot has finished.
const CLOSED_LABEL: &str = "That's all for today, thanks for tuning in!";

impl Timetable {
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        if let [waiting, banner] = self.preamble.as_slice() {
            push_entry(&mut html, waiting, "", &waiting.timeframe);
            push_entry(&mut html, banner, ON_AIR_LABEL, &banner.timeframe);
        }

        for entry in &self.body {
            push_entry(&mut html, entry, &entry.label, &entry.timeframe);
        }

        if let Some(closed) = &self.postamble {
            push_entry(&mut html, closed, CLOSED_LABEL, "");
        }

        html
    }
}

fn push_entry(html: &mut String, entry: &DisplayEntry, label: &str, timeframe: &str) {
    let attrs = format!(
        r#"class="dtimer" data-sh="{}" data-sm="{}" data-eh="{}" data-em="{}" data-es="{}""#,
        entry.start_hour, entry.start_minute, entry.end_hour, entry.end_minute, entry.end_second
    );

    html.push_str(&format!("<h1 {attrs}>{}</h1>\n", escape(label)));
    html.push_str(&format!("<h2 {attrs}>{}</h2>\n", escape(timeframe)));
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::{ScheduleEntry, TimeOfDay};

    fn build(names: &[&str]) -> Timetable {
        let entries = names
            .iter()
            .enumerate()
            .map(|(idx, name)| ScheduleEntry {
                start: TimeOfDay::new(9 + idx as u8, 0),
                end: TimeOfDay::new(10 + idx as u8, 0),
                name: name.to_string(),
            })
            .collect::<Vec<_>>();
        Timetable::build(&entries).unwrap()
    }

    #[test]
    fn emits_one_element_pair_per_display_entry() {
        let timetable = build(&["DJ A", "DJ B"]);
        let html = timetable.to_html();

        // 2 preamble + 2 body + 1 postamble
        assert_eq!(html.matches("<h1 ").count(), 5);
        assert_eq!(html.matches("<h2 ").count(), 5);
    }

    #[test]
    fn body_entry_carries_countdown_attributes_and_texts() {
        let timetable = build(&["DJ A"]);
        let html = timetable.to_html();

        assert!(html.contains(
            r#"<h1 class="dtimer" data-sh="9" data-sm="0" data-eh="9" data-em="59" data-es="59">DJ A</h1>"#
        ));
        assert!(html.contains(">9:00 - 10:00</h2>"));
    }

    #[test]
    fn synthetic_entries_get_their_static_texts() {
        let timetable = build(&["DJ A"]);
        let html = timetable.to_html();

        assert!(html.contains(">Start at 9:00</h2>"));
        assert!(html.contains(&format!(">{ON_AIR_LABEL}</h1>")));
        assert!(html.contains(&format!(">{CLOSED_LABEL}</h1>")));
    }

    #[test]
    fn performer_names_are_escaped() {
        let timetable = build(&[r#"Tom & "DJ" <X>"#]);
        let html = timetable.to_html();

        assert!(html.contains(">Tom &amp; &quot;DJ&quot; &lt;X&gt;</h1>"));
    }
}
