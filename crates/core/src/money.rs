/// Renders an amount the way it appears in letters and dashboards:
/// thousands separators, sign preserved, cents only when non-zero.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(20_000.0), "20,000");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(999.0), "999");
    }

    #[test]
    fn preserves_sign_and_cents() {
        assert_eq!(format_amount(-15_000.0), "-15,000");
        assert_eq!(format_amount(2_501.42), "2,501.42");
        assert_eq!(format_amount(0.0), "0");
    }
}
