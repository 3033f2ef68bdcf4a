//! Output formatting utilities

use crate::application::CalendarPage;
use crate::domain::{DayCell, JournalEntry};
use chrono::Datelike;

const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Format a month calendar.
///
/// Today is bracketed, days with an entry carry a `*`.
pub fn format_calendar(page: &CalendarPage) -> String {
    let mut output = String::new();

    output.push_str(&page.month.label());
    output.push('\n');

    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!(" {:>2}  ", label))
        .collect();
    output.push_str(header.trim_end());
    output.push('\n');

    for week in &page.grid.weeks {
        let line: String = week.iter().map(format_day_cell).collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }

    let entries: Vec<_> = page.grid.entries().collect();
    if !entries.is_empty() {
        output.push('\n');
        for entry in entries {
            output.push_str(&format!(
                "{:>2}  #{}  {}\n",
                entry.date.day(),
                entry.id,
                entry.title
            ));
        }
    }

    let nav: Vec<String> = [
        page.previous.map(|m| format!("Previous: {}", m)),
        page.next.map(|m| format!("Next: {}", m)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !nav.is_empty() {
        output.push('\n');
        output.push_str(&nav.join("   "));
        output.push('\n');
    }

    output
}

fn format_day_cell(cell: &DayCell) -> String {
    let Some(date) = cell.date else {
        return "     ".to_string();
    };

    let (open, close) = if cell.is_today { ('[', ']') } else { (' ', ' ') };
    let marker = if cell.has_entry() { '*' } else { ' ' };
    format!("{}{:>2}{}{}", open, date.day(), marker, close)
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  #{}  {}\n",
            entry.created.format("%Y-%m-%d %H:%M"),
            entry.id,
            entry.title
        ));
    }
    output
}

/// Format a single entry with its content
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = format!(
        "#{} {}\nCreated: {}\n",
        entry.id,
        entry.title,
        entry.created.format("%Y-%m-%d %H:%M")
    );
    if !entry.content.is_empty() {
        output.push('\n');
        output.push_str(&entry.content);
        if !entry.content.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, EntrySummary, MonthGrid, MonthToken};
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn page(today: NaiveDate, entries: &[EntrySummary]) -> CalendarPage {
        let month = MonthToken::new(2024, 3).unwrap();
        let (previous, next) = month.adjacent();
        CalendarPage {
            month,
            grid: MonthGrid::build(month, today, entries),
            previous,
            next,
        }
    }

    fn entry(id: u64, title: &str, content: &str) -> JournalEntry {
        JournalEntry {
            id: EntryId(id),
            title: title.to_string(),
            content: content.to_string(),
            created: NaiveDateTime::parse_from_str("2024-03-05 21:07", "%Y-%m-%d %H:%M")
                .unwrap(),
        }
    }

    #[test]
    fn test_format_calendar_layout() {
        let output = format_calendar(&page(date(2024, 4, 1), &[]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "March 2024");
        assert_eq!(lines[1], " Mo   Tu   We   Th   Fr   Sa   Su");
        // March 2024 starts on a Friday
        assert_eq!(lines[2], "                      1    2    3");
        assert_eq!(lines[3], "  4    5    6    7    8    9   10");
        assert_eq!(lines[6], " 25   26   27   28   29   30   31");
        assert_eq!(lines[8], "Previous: 2024-02   Next: 2024-04");
    }

    #[test]
    fn test_format_calendar_marks_today_and_entries() {
        let entries = vec![EntrySummary::new(EntryId(1), "A", date(2024, 3, 5))];
        let output = format_calendar(&page(date(2024, 3, 5), &entries));

        assert!(output.contains("[ 5*]"));
        assert!(output.contains(" 5  #1  A\n"));
    }

    #[test]
    fn test_format_calendar_today_without_entry() {
        let output = format_calendar(&page(date(2024, 3, 6), &[]));
        assert!(output.contains("[ 6 ]"));
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_format_empty_entry_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let output = format_entry_list(&[entry(2, "Second", ""), entry(1, "First", "")]);
        assert_eq!(
            output,
            "2024-03-05 21:07  #2  Second\n2024-03-05 21:07  #1  First\n"
        );
    }

    #[test]
    fn test_format_entry_with_content() {
        let output = format_entry(&entry(4, "Walk", "Cold but sunny."));
        assert_eq!(
            output,
            "#4 Walk\nCreated: 2024-03-05 21:07\n\nCold but sunny.\n"
        );
    }

    #[test]
    fn test_format_entry_without_content() {
        let output = format_entry(&entry(4, "Walk", ""));
        assert_eq!(output, "#4 Walk\nCreated: 2024-03-05 21:07\n");
    }
}
