//! Plain-text table layout for terminal output

use league_data::{Cell, ManagerStanding, Table};

/// Cell text for the terminal; links keep their target visible
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Link { text, url } => format!("{text} <{url}>"),
        other => other.to_string(),
    }
}

/// Left-aligned columns separated by two spaces, with a rule under the header
pub fn render_grid(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(value.chars().count());
            }
        }
    }

    let line = |values: &[String]| {
        let padded: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(columns));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub fn render_table(table: &Table) -> String {
    let rows: Vec<Vec<String>> =
        table.rows().iter().map(|row| row.iter().map(cell_text).collect()).collect();
    render_grid(table.columns(), &rows)
}

pub fn render_standings(standings: &[ManagerStanding]) -> String {
    let columns: Vec<String> = ["Rank", "Manager", "Record", "Points For", "Max PF (Potential)"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows: Vec<Vec<String>> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                (i + 1).to_string(),
                s.manager.clone(),
                s.record.clone(),
                format!("{:.2}", s.points_for),
                format!("{:.2}", s.max_points_for),
            ]
        })
        .collect();
    render_grid(&columns, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_pads_to_widest_value() {
        let out = render_grid(
            &["A".to_string(), "Name".to_string()],
            &[vec!["10".to_string(), "Jo".to_string()], vec!["2".to_string(), "Brodack".to_string()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "A   Name");
        assert_eq!(lines[1], "--  -------");
        assert_eq!(lines[2], "10  Jo");
        assert_eq!(lines[3], "2   Brodack");
    }

    #[test]
    fn test_links_show_target() {
        let cell = Cell::Link {
            text: "Bijan Robinson".to_string(),
            url: "https://sleeper.app/players/9509".to_string(),
        };
        assert_eq!(cell_text(&cell), "Bijan Robinson <https://sleeper.app/players/9509>");
        assert_eq!(cell_text(&Cell::Empty), "");
    }

    #[test]
    fn test_standings_ranked_with_two_decimals() {
        let standings = vec![ManagerStanding {
            manager: "Jared".to_string(),
            record: "5-3".to_string(),
            points_for: 1000.25,
            max_points_for: 1100.0,
        }];

        let out = render_standings(&standings);
        let row = out.lines().nth(2).unwrap();
        assert!(row.starts_with("1"));
        assert!(row.contains("Jared"));
        assert!(row.contains("1000.25"));
        assert!(row.contains("1100.00"));
    }
}
