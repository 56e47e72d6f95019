//! Coordinate input masking.

/// Maximum digits kept after the decimal separator.
pub const COORDINATE_DECIMALS: usize = 6;

/// Normalise text typed into a latitude or longitude field.
///
/// Keeps an optional leading `-`, digits and a single `.` separator, cuts
/// the fraction to [`COORDINATE_DECIMALS`] digits and drops everything else.
///
/// ```
/// use estaciones_web::views::mask_coordinate;
///
/// assert_eq!(mask_coordinate("-75.5912345"), "-75.591234");
/// assert_eq!(mask_coordinate("6,259"), "6259");
/// assert_eq!(mask_coordinate("1.2.3"), "1.23");
/// ```
pub fn mask_coordinate(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_dot = false;
    let mut decimals = 0;

    for c in raw.trim().chars() {
        match c {
            '-' if out.is_empty() => out.push('-'),
            '.' if !seen_dot => {
                seen_dot = true;
                out.push('.');
            }
            '0'..='9' => {
                if seen_dot {
                    if decimals == COORDINATE_DECIMALS {
                        continue;
                    }
                    decimals += 1;
                }
                out.push(c);
            }
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_numbers() {
        assert_eq!(mask_coordinate("6.259"), "6.259");
        assert_eq!(mask_coordinate("-75.591"), "-75.591");
        assert_eq!(mask_coordinate("0"), "0");
        assert_eq!(mask_coordinate(""), "");
    }

    #[test]
    fn sign_only_at_start() {
        assert_eq!(mask_coordinate("--5"), "-5");
        assert_eq!(mask_coordinate("5-"), "5");
        assert_eq!(mask_coordinate("  -1.5 "), "-1.5");
    }

    #[test]
    fn drops_thousands_separators_and_letters() {
        assert_eq!(mask_coordinate("1,000.25"), "1000.25");
        assert_eq!(mask_coordinate("12abc.3e4"), "12.34");
    }

    #[test]
    fn truncates_fraction() {
        assert_eq!(mask_coordinate("0.1234567890"), "0.123456");
    }
}
