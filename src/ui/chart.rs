//! Terminal bar chart for the feedback rating distribution

use owo_colors::{OwoColorize, Style};

const MAX_BAR_WIDTH: usize = 40;

/// One fixed color per rating 1-5. The storage layer constrains ratings to
/// that range, so a rating can never fall outside this table.
fn rating_style(rating: u8) -> Style {
    match rating {
        1 => Style::new().red(),
        2 => Style::new().yellow(),
        3 => Style::new().bright_yellow(),
        4 => Style::new().green(),
        _ => Style::new().blue(),
    }
}

/// Render counts-per-rating as horizontal bars scaled to the largest count.
/// Returns an empty string for empty input; the caller decides what to print
/// instead. Presentation-only.
pub fn rating_chart(histogram: &[(u8, usize)]) -> String {
    let max = histogram.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    for (rating, count) in histogram {
        let width = (count * MAX_BAR_WIDTH).div_ceil(max);
        let bar = "█".repeat(width);
        out.push_str(&format!(
            "{} {} {}\n",
            rating,
            bar.style(rating_style(*rating)),
            count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram_renders_nothing() {
        assert_eq!(rating_chart(&[]), "");
    }

    #[test]
    fn test_bars_scale_to_max_count() {
        let rendered = rating_chart(&[(1, 2), (5, 4)]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);

        let bar_len = |line: &str| line.chars().filter(|c| *c == '█').count();
        assert_eq!(bar_len(lines[1]), MAX_BAR_WIDTH);
        assert_eq!(bar_len(lines[0]), MAX_BAR_WIDTH / 2);
    }

    #[test]
    fn test_every_rating_has_a_color() {
        // All five ratings render without panicking and carry their count.
        let histogram: Vec<(u8, usize)> = (1..=5).map(|r| (r, 1)).collect();
        let rendered = rating_chart(&histogram);
        assert_eq!(rendered.lines().count(), 5);
        for rating in 1..=5 {
            assert!(rendered.lines().any(|l| l.starts_with(&rating.to_string())));
        }
    }
}
