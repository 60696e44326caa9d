use std::fmt::Write;

use crate::app::SearchView;
use crate::search::{EntityGroup, Status, StatusSummary, UnifiedRecord};

pub const EMPTY_STATE: &str = "No records found";

const COLUMNS: [(&str, usize); 7] = [
    ("ID", 18),
    ("Type", 11),
    ("Name", 24),
    ("Email", 28),
    ("Phone", 14),
    ("Status", 8),
    ("Detail", 52),
];

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn row(cells: [&str; 7]) -> String {
    let mut line = String::new();
    for (cell, (_, width)) in cells.iter().zip(COLUMNS.iter()) {
        let _ = write!(line, "{:<width$}  ", clip(cell, *width), width = *width);
    }
    line.trim_end().to_string()
}

fn record_row(record: &UnifiedRecord) -> String {
    let route = record.detail_route();
    row([
        record.id_label.as_str(),
        record.group.as_str(),
        record.name.as_deref().unwrap_or("-"),
        record.email.as_deref().unwrap_or("-"),
        record.phone.as_deref().unwrap_or("-"),
        record.status.as_str(),
        route.as_str(),
    ])
}

/// Table body, empty state, or the aggregate error in place of the rows
pub fn render_view(view: &SearchView) -> String {
    let mut out = String::new();
    out.push_str(&row(COLUMNS.map(|(h, _)| h)));
    out.push('\n');
    match view {
        SearchView::Error(msg) => {
            out.push_str(msg);
            out.push('\n');
        }
        SearchView::Rows(rows) if rows.is_empty() => {
            out.push_str(EMPTY_STATE);
            out.push('\n');
        }
        SearchView::Rows(rows) => {
            for record in rows {
                out.push_str(&record_row(record));
                out.push('\n');
            }
        }
    }
    out
}

pub fn render_summary(summary: &StatusSummary) -> String {
    let mut out = String::new();
    for group in EntityGroup::ALL {
        let _ = writeln!(
            out,
            "{:<12} pending {:>4}  approved {:>4}  rejected {:>4}",
            group.as_str(),
            summary.count(group, Status::Pending),
            summary.count(group, Status::Approved),
            summary.count(group, Status::Rejected),
        );
    }
    let _ = writeln!(out, "{:<12} {}", "Total", summary.total());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_marks_truncation() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn rows_link_to_detail_page() {
        let record = UnifiedRecord {
            id: "65b0abcd".to_string(),
            group: EntityGroup::Institution,
            name: Some("Dojo One".to_string()),
            email: None,
            phone: None,
            phone_alt: None,
            aadhar_number: None,
            reg_no: None,
            transaction_id: None,
            id_label: "INST-ABCD".to_string(),
            status: Status::Approved,
            created_at: None,
        };
        let out = render_view(&SearchView::Rows(vec![record]));
        let line = out.lines().nth(1).unwrap();
        assert!(line.starts_with("INST-ABCD"));
        assert!(line.ends_with("/admin/institutions/65b0abcd"));
    }

    #[test]
    fn empty_rows_show_empty_state() {
        let out = render_view(&SearchView::Rows(vec![]));
        assert!(out.starts_with("ID"));
        assert!(out.contains(EMPTY_STATE));
    }

    #[test]
    fn error_replaces_table_body() {
        let out = render_view(&SearchView::Error("Failed to load records: boom".to_string()));
        assert_eq!(out.lines().nth(1), Some("Failed to load records: boom"));
    }

    #[test]
    fn summary_lists_every_group() {
        let out = render_summary(&StatusSummary::default());
        assert!(out.contains("Player"));
        assert!(out.contains("Institution"));
        assert!(out.contains("Official"));
        assert!(out.trim_end().ends_with('0'));
    }
}
