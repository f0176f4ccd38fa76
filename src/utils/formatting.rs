//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Human-readable duration.
///
/// - `<= 0`       → `"0h 0m"`
/// - under 1 hour → `"45m"`
/// - whole hours  → `"2h"`
/// - otherwise    → `"2h 5m"`
pub fn format_duration(total_minutes: i64) -> String {
    if total_minutes <= 0 {
        return "0h 0m".to_string();
    }

    let h = total_minutes / 60;
    let m = total_minutes % 60;

    if h == 0 {
        format!("{}m", m)
    } else if m == 0 {
        format!("{}h", h)
    } else {
        format!("{}h {}m", h, m)
    }
}

/// Value shown next to "Remaining to work" / "Overtime".
pub fn format_remaining(remaining: i64) -> String {
    let base = format_duration(remaining.abs());
    if remaining < 0 {
        format!("{base} (over)")
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_shapes() {
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(-15), "0h 0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(125), "2h 5m");
        assert_eq!(format_duration(540), "9h");
    }

    #[test]
    fn remaining_marks_overtime() {
        assert_eq!(format_remaining(90), "1h 30m");
        assert_eq!(format_remaining(-60), "1h (over)");
        assert_eq!(format_remaining(0), "0h 0m");
    }
}
