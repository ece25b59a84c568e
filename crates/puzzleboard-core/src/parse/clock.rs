/// Normalize a `mm:ss` / `hh:mm:ss` style clock token to total whole seconds.
///
/// Place-value summation from the right: the rightmost group is seconds, the
/// next minutes, the next hours. Groups must be non-empty runs of ASCII
/// digits; anything else (including fractional seconds) is rejected.
pub fn clock_to_seconds(token: &str) -> Option<i64> {
    let mut total: i64 = 0;
    let mut scale: i64 = 1;
    for group in token.rsplit(':') {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: i64 = group.parse().ok()?;
        total = total.checked_add(value.checked_mul(scale)?)?;
        scale = scale.checked_mul(60)?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(clock_to_seconds("1:30"), Some(90));
        assert_eq!(clock_to_seconds("0:59"), Some(59));
        assert_eq!(clock_to_seconds("12:05"), Some(725));
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(clock_to_seconds("1:02:03"), Some(3723));
    }

    #[test]
    fn bare_integer_is_seconds() {
        assert_eq!(clock_to_seconds("45"), Some(45));
    }

    #[test]
    fn rejects_fractional_and_malformed() {
        assert_eq!(clock_to_seconds("1:30.5"), None);
        assert_eq!(clock_to_seconds("2.5"), None);
        assert_eq!(clock_to_seconds(":30"), None);
        assert_eq!(clock_to_seconds("1::30"), None);
        assert_eq!(clock_to_seconds(""), None);
    }
}
