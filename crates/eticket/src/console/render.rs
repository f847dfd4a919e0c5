//! Plain-text table rendering for query results.

use std::io::{self, Write};

use crate::db::models::{EventSales, EventSummary, SeatAvailability};

/// Column headers of the event listing.
pub const EVENT_HEADERS: [&str; 3] = ["EventID", "Title", "Category"];

/// Draw `rows` under `headers` as a box-drawn table followed by a row count.
pub fn render_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    rule(out, &widths, '┌', '┬', '┐')?;
    line(out, &widths, headers.iter().copied())?;
    rule(out, &widths, '├', '┼', '┤')?;
    for row in rows {
        line(out, &widths, row.iter().map(String::as_str))?;
    }
    rule(out, &widths, '└', '┴', '┘')?;

    let noun = if rows.len() == 1 { "row" } else { "rows" };
    writeln!(out, "({} {})", rows.len(), noun)
}

fn rule<W: Write>(out: &mut W, widths: &[usize], left: char, mid: char, right: char) -> io::Result<()> {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    let mid = mid.to_string();
    writeln!(out, "{}{}{}", left, segments.join(mid.as_str()), right)
}

fn line<'a, W: Write>(
    out: &mut W,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    write!(out, "│")?;
    for (cell, width) in cells.zip(widths) {
        // `{:<width$}` pads by chars, which is what the widths count.
        write!(out, " {:<width$} │", cell, width = *width)?;
    }
    writeln!(out)
}

/// Format an amount with two decimals, as stored in `NUMERIC(10,2)`.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn event_rows(events: &[EventSummary]) -> Vec<Vec<String>> {
    events
        .iter()
        .map(|e| {
            vec![
                e.event_id.to_string(),
                e.title.clone(),
                e.category.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

pub fn sales_rows(sales: &[EventSales]) -> Vec<Vec<String>> {
    sales
        .iter()
        .map(|s| {
            vec![
                s.event_id.to_string(),
                s.title.clone(),
                s.tickets_sold.to_string(),
                format_money(s.revenue),
            ]
        })
        .collect()
}

pub fn seat_rows(showtimes: &[SeatAvailability]) -> Vec<Vec<String>> {
    showtimes
        .iter()
        .map(|s| {
            vec![
                s.showtime_id.to_string(),
                s.title.clone(),
                s.starts_at.format("%Y-%m-%d %H:%M").to_string(),
                s.available.to_string(),
                s.held.to_string(),
                s.sold.to_string(),
                s.total().to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut out = Vec::new();
        render_table(&mut out, headers, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_event_table() {
        let events = vec![
            EventSummary {
                event_id: 1,
                title: "Drake Live Concert".to_string(),
                category: Some("Concert".to_string()),
            },
            EventSummary {
                event_id: 2,
                title: "Avengers: Endgame".to_string(),
                category: None,
            },
        ];
        let text = rendered(&EVENT_HEADERS, &event_rows(&events));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "┌─────────┬────────────────────┬──────────┐");
        assert_eq!(lines[1], "│ EventID │ Title              │ Category │");
        assert_eq!(lines[3], "│ 1       │ Drake Live Concert │ Concert  │");
        assert_eq!(lines[4], "│ 2       │ Avengers: Endgame  │          │");
        assert_eq!(lines[5], "└─────────┴────────────────────┴──────────┘");
        assert_eq!(lines[6], "(2 rows)");
    }

    #[test]
    fn test_render_empty_table_keeps_header() {
        let text = rendered(&["EventID"], &[]);
        assert!(text.contains("│ EventID │"));
        assert!(text.ends_with("(0 rows)\n"));
    }

    #[test]
    fn test_render_widths_count_chars() {
        let rows = vec![vec!["Café Théâtre".to_string()]];
        let text = rendered(&["Title"], &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].chars().count(), lines[3].chars().count());
        assert_eq!(lines[5], "(1 row)");
    }

    #[test]
    fn test_seat_rows_include_total() {
        let showtime = SeatAvailability {
            showtime_id: 1,
            title: "Drake Live Concert".to_string(),
            starts_at: chrono::NaiveDate::from_ymd_opt(2025, 12, 10)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap(),
            available: 2,
            held: 1,
            sold: 0,
        };
        let rows = seat_rows(&[showtime]);
        assert_eq!(
            rows[0],
            vec!["1", "Drake Live Concert", "2025-12-10 20:00", "2", "1", "0", "3"]
        );
    }

    #[test]
    fn test_sales_row_without_sales() {
        let rows = sales_rows(&[EventSales {
            event_id: 3,
            title: "Raptors Home Opener".to_string(),
            tickets_sold: 0,
            revenue: 0.0,
        }]);
        assert_eq!(rows[0], vec!["3", "Raptors Home Opener", "0", "0.00"]);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(150.0), "150.00");
        assert_eq!(format_money(0.0), "0.00");
    }
}
