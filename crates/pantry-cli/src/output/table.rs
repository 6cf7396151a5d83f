#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_WIDTH: usize = 6;

/// Render an aligned table for string rows. Numeric cells are right-aligned.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize_severity(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '%'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color a padded cell by severity keyword, leaving padding outside the
/// escape codes.
fn colorize_severity(padded: &str) -> String {
    let trimmed = padded.trim_end();
    let code = match trimmed.to_ascii_lowercase().as_str() {
        "high" | "failed" => "31",
        "medium" => "33",
        "low" | "complete" => "32",
        _ => return padded.to_string(),
    };
    let fill = &padded[trimmed.len()..];
    format!("\u{1b}[{code}m{trimmed}\u{1b}[0m{fill}")
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, render_entity_table, truncate_text};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["recipe", "score", "severity"];
        let rows = vec![
            vec!["Soup".to_string(), "100".to_string(), "low".to_string()],
            vec![
                "Lemon meringue pie".to_string(),
                "61.1".to_string(),
                "high".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("recipe"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
        assert!(lines[2].contains("   100"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["recipe", "file"];
        let rows = vec![vec![
            "Shortbread".to_string(),
            "/srv/recipes/biscuits/shortbread-traditional.xlsx".to_string(),
        ]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("row line");
        assert_eq!(row.chars().count(), 40);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn severity_cells_are_colored() {
        let headers = ["severity"];
        let rows = vec![vec!["high".to_string()], vec!["other".to_string()]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].starts_with("\u{1b}[31mhigh\u{1b}[0m"));
        assert!(!lines[3].contains('\u{1b}'));
    }

    #[test]
    fn truncation_marks_cut_text() {
        assert_eq!(truncate_text("Béchamel", 4), "Béc…");
        assert_eq!(truncate_text("Roux", 4), "Roux");
    }
}
