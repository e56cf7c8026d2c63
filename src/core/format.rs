//! Display helpers for money and dates, in the pt-BR conventions the UI uses.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Intl's pt-BR currency output separates the symbol with a no-break space.
const CURRENCY_PREFIX: &str = "R$\u{a0}";

/// Formats an amount as Brazilian Real, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{CURRENCY_PREFIX}{grouped},{:02}", cents % 100)
}

/// Longest amount the input accepts, in digits including cents. Keeps the
/// value exact as an `f64` and clear of the `u64` cast in [`format_brl`].
const MAX_AMOUNT_DIGITS: usize = 15;

fn digits_as_cents(input: &str) -> Option<f64> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // Leading zeros come from the mask itself and don't count
    let significant: String = digits.trim_start_matches('0').chars().take(MAX_AMOUNT_DIGITS).collect();
    if significant.is_empty() {
        return Some(0.0);
    }
    significant.parse::<f64>().ok().map(|cents| cents / 100.0)
}

/// Live mask for the amount input: every digit typed shifts in from the
/// right as cents.
pub fn mask_amount_input(raw: &str) -> String {
    digits_as_cents(raw).map(format_brl).unwrap_or_default()
}

/// Reads back an amount produced by [`mask_amount_input`].
pub fn parse_masked_amount(masked: &str) -> Option<f64> {
    digits_as_cents(masked)
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// `2024-08-06` → `06/08/2024`. Anything unparseable is returned as-is.
pub fn format_date(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => iso.to_string(),
    }
}

/// Share of the scheduled span between `start` and `end` that has elapsed
/// by `today`, as a whole percentage clamped to 0..=100.
pub fn schedule_progress(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Option<u8> {
    let start = parse_date(start?)?;
    let end = parse_date(end?)?;
    if end < start {
        return None;
    }

    let total = (end - start).num_days();
    if total == 0 {
        return Some(if today >= end { 100 } else { 0 });
    }

    let elapsed = (today - start).num_days().clamp(0, total);
    Some(((elapsed as f64 / total as f64) * 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn formats_reais() {
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(1000.0), "R$\u{a0}1.000,00");
        assert_eq!(format_brl(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_brl(1234567.8), "R$\u{a0}1.234.567,80");
        assert_eq!(format_brl(-12.5), "-R$\u{a0}12,50");
        assert_eq!(format_brl(0.005), "R$\u{a0}0,01");
    }

    #[test]
    fn mask_treats_digits_as_cents() {
        assert_eq!(mask_amount_input("1"), "R$\u{a0}0,01");
        assert_eq!(mask_amount_input("123456"), "R$\u{a0}1.234,56");
        // Typing one more digit into an already masked value.
        assert_eq!(mask_amount_input("R$\u{a0}0,015"), "R$\u{a0}0,15");
        assert_eq!(mask_amount_input("abc"), "");
        assert_eq!(mask_amount_input(""), "");
    }

    #[test]
    fn mask_stops_at_max_digits() {
        let full = "9".repeat(MAX_AMOUNT_DIGITS);
        let masked = mask_amount_input(&full);
        assert_eq!(masked, "R$\u{a0}9.999.999.999.999,99");
        // Extra keystrokes are dropped instead of overflowing
        assert_eq!(mask_amount_input(&format!("{}9", masked)), masked);
        assert_eq!(mask_amount_input(&"9".repeat(25)), masked);
        assert_eq!(mask_amount_input("R$\u{a0}0,00"), "R$\u{a0}0,00");
    }

    #[test]
    fn parses_masked_values() {
        assert_eq!(parse_masked_amount("R$\u{a0}1.234,56"), Some(1234.56));
        assert_eq!(parse_masked_amount(&format_brl(1000.0)), Some(1000.0));
        assert_eq!(parse_masked_amount("R$ "), None);
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date("2024-08-06"), "06/08/2024");
        assert_eq!(format_date("2024-08-06T10:00:00Z"), "06/08/2024");
        assert_eq!(format_date("2024-08-06T10:00:00.000"), "06/08/2024");
        assert_eq!(format_date("amanhã"), "amanhã");
    }

    #[test]
    fn progress_between_dates() {
        let start = Some("2024-01-01");
        let end = Some("2024-01-11");
        assert_eq!(schedule_progress(start, end, date("2023-12-25")), Some(0));
        assert_eq!(schedule_progress(start, end, date("2024-01-06")), Some(50));
        assert_eq!(schedule_progress(start, end, date("2024-02-01")), Some(100));
    }

    #[test]
    fn progress_edge_cases() {
        assert_eq!(schedule_progress(None, Some("2024-01-11"), date("2024-01-05")), None);
        assert_eq!(
            schedule_progress(Some("2024-01-11"), Some("2024-01-01"), date("2024-01-05")),
            None
        );
        assert_eq!(
            schedule_progress(Some("2024-01-01"), Some("2024-01-01"), date("2024-01-01")),
            Some(100)
        );
        assert_eq!(
            schedule_progress(Some("2024-01-01"), Some("2024-01-01"), date("2023-12-31")),
            Some(0)
        );
        assert_eq!(schedule_progress(Some("x"), Some("2024-01-01"), date("2024-01-01")), None);
    }
}
