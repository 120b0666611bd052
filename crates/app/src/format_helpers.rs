/// Shared formatting utilities for the UI layer.
///
/// Date functions accept ISO-8601 strings (e.g. "2026-01-20T21:35:00Z") and
/// produce human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Placeholder for missing values in tables and detail panels.
pub const EMPTY: &str = "-";

/// Hashes up to this many characters are shown in full.
const HASH_FULL_LEN: usize = 12;

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 || !date_str.is_char_boundary(10) {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// [`format_date_human`] for optional fields; missing dates render as `-`.
pub fn format_opt_date(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => format_date_human(d),
        None => EMPTY.to_string(),
    }
}

/// Format an ISO datetime string as "Jan 20, 2026 9:35 PM" (with 12-hour time).
///
/// Falls back to date-only if time portion is missing.
pub fn format_datetime_human(date_str: &str) -> String {
    let date_part = format_date_human(date_str);

    // Need at least "YYYY-MM-DDTHH:MM" (16 chars)
    if date_str.len() < 16 || !date_str.is_char_boundary(16) {
        return date_part;
    }

    let hour_str = &date_str[11..13];
    let min_str = &date_str[14..16];

    let hour: u32 = match hour_str.parse() {
        Ok(h) => h,
        Err(_) => return date_part,
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{} {}:{} {}", date_part, display_hour, min_str, ampm)
}

/// Contract period as "Jan 5, 2026 - Feb 5, 2026".
pub fn format_period(start: Option<&str>, end: Option<&str>) -> String {
    if start.is_none() && end.is_none() {
        return EMPTY.to_string();
    }
    format!("{} - {}", format_opt_date(start), format_opt_date(end))
}

/// Group an integer with `.` thousands separators: 1250000 -> "1.250.000".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Rupiah amount rounded to whole units: `Rp 1.250.000`.
pub fn format_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return EMPTY.to_string();
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}Rp {}", group_thousands(amount.abs().round() as u64))
}

/// Plain grouped count for dashboard cards: 12500 -> "12.500".
pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

/// Five-character star string for a 0 to 5 score.
pub fn stars(filled: u8) -> String {
    let filled = usize::from(filled.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Average rating as "4.6" with one decimal, or `-`.
pub fn format_score(score: Option<f64>) -> String {
    match score.filter(|s| s.is_finite()) {
        Some(s) => format!("{s:.1}"),
        None => EMPTY.to_string(),
    }
}

/// Up to two uppercase initials: "Siti Rahma Putri" -> "SR".
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Shorten a chain transaction hash to `first8...last4`.
///
/// Hashes of 12 characters or fewer are returned unchanged.
pub fn truncate_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= HASH_FULL_LEN {
        return hash.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Optional text for display; blank values become `-`.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => EMPTY.to_string(),
    }
}
