/// Format an amount the way the shop displays prices: thousands grouped with
/// `.` and a trailing currency marker, e.g. `120000` → `"120.000 VND"`.
pub fn format_vnd(amount: f64) -> String {
    let value = amount.round() as i64;
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped} VND")
    } else {
        format!("{grouped} VND")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_vnd(120_000.0), "120.000 VND");
        assert_eq!(format_vnd(1_250_000.0), "1.250.000 VND");
    }

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(format_vnd(0.0), "0 VND");
        assert_eq!(format_vnd(999.0), "999 VND");
    }

    #[test]
    fn test_rounds_fractional_amounts() {
        assert_eq!(format_vnd(1000.4), "1.000 VND");
        assert_eq!(format_vnd(999.6), "1.000 VND");
    }
}
