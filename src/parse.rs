use chrono::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    #[error("could not parse '{0}'")]
    InvalidFormat(String),
}

/// parses a timeout string like `1h30m`, `5m` or `90s` into a [`Duration`]
///
/// each of the hours/minutes/seconds fields is optional, but they have to
/// appear in that order and at least one of them has to be present
pub fn parse_time(input: &str) -> Result<Duration, ParseTimeError> {
    let invalid = || ParseTimeError::InvalidFormat(input.to_string());
    let mut rest = input.trim_start();
    let mut matched = false;
    let mut seconds = 0i64;
    for (unit, scale) in [('h', 3600), ('m', 60), ('s', 1)] {
        if let Some((value, tail)) = field(rest, unit) {
            seconds = value
                .checked_mul(scale)
                .and_then(|v| seconds.checked_add(v))
                .ok_or_else(invalid)?;
            matched = true;
            rest = tail.trim_start();
        }
    }
    // anything left over is not part of the timeout (also catches fields
    // given out of order)
    if !matched || !rest.is_empty() {
        return Err(invalid());
    }
    Duration::try_seconds(seconds).ok_or_else(invalid)
}

/// matches a single `<digits><unit>` field, returning its value and the rest
/// of the input
fn field(input: &str, unit: char) -> Option<(i64, &str)> {
    let digits = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits == 0 {
        return None;
    }
    let tail = input[digits..].strip_prefix(unit)?;
    let value = input[..digits].parse().ok()?;
    Some((value, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_combined_fields() {
        assert_eq!(parse_time("1h30m"), Ok(Duration::seconds(5400)));
        assert_eq!(parse_time("1h30m45s"), Ok(Duration::seconds(5445)));
        assert_eq!(parse_time("10m30s"), Ok(Duration::seconds(630)));
    }

    #[test]
    fn parses_single_fields() {
        assert_eq!(parse_time("90s"), Ok(Duration::seconds(90)));
        assert_eq!(parse_time("2h"), Ok(Duration::seconds(7200)));
        assert_eq!(parse_time("5m"), Ok(Duration::seconds(300)));
        assert_eq!(parse_time("0s"), Ok(Duration::zero()));
    }

    #[test]
    fn allows_whitespace_between_fields() {
        assert_eq!(parse_time("1h 30m"), Ok(Duration::seconds(5400)));
        assert_eq!(parse_time(" 2m 5s "), Ok(Duration::seconds(125)));
    }

    #[test]
    fn requires_at_least_one_field() {
        assert_eq!(
            parse_time(""),
            Err(ParseTimeError::InvalidFormat(String::new()))
        );
        assert_eq!(
            parse_time("abc"),
            Err(ParseTimeError::InvalidFormat("abc".to_string()))
        );
        assert_eq!(
            parse_time("h"),
            Err(ParseTimeError::InvalidFormat("h".to_string()))
        );
    }

    #[test]
    fn rejects_leftover_input() {
        assert!(parse_time("1h30").is_err());
        assert!(parse_time("5m!").is_err());
        assert!(parse_time("12").is_err());
    }

    #[test]
    fn rejects_fields_out_of_order() {
        assert!(parse_time("30m1h").is_err());
        assert!(parse_time("10s5m").is_err());
    }

    #[test]
    fn rejects_values_that_do_not_fit() {
        let input = "9999999999999999999h";
        assert_eq!(
            parse_time(input),
            Err(ParseTimeError::InvalidFormat(input.to_string()))
        );
        let input = "9999999999999999s";
        assert_eq!(
            parse_time(input),
            Err(ParseTimeError::InvalidFormat(input.to_string()))
        );
    }
}
