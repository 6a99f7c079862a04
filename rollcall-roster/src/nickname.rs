use chrono::NaiveDate;

/// Year assumed for date tokens that carry no year component.
pub const REFERENCE_YEAR: i32 = 2025;

/// A display nickname split into its base name and an optional trailing
/// expiry date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedNickname {
    pub base_name: String,
    pub expiry: Option<NaiveDate>,
}

/// Extract a trailing expiry date token from an optional display nickname.
///
/// Only the last whitespace-separated token is inspected: `m-d` takes the
/// fixed reference year, `yy-m-d` takes century 2000. Any other token shape,
/// non-integer part, or impossible calendar date leaves the full nickname
/// untouched as the base name. Malformed tokens are never an error; a
/// nickname that merely ends in a hyphenated word must survive unchanged.
pub fn parse_nickname(nickname: Option<&str>) -> ParsedNickname {
    let Some(raw) = nickname else {
        return ParsedNickname {
            base_name: String::new(),
            expiry: None,
        };
    };

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let parsed = tokens
        .split_last()
        .and_then(|(last, rest)| parse_date_token(last).map(|date| (date, rest)));

    match parsed {
        Some((date, rest)) => ParsedNickname {
            base_name: rest.join(" "),
            expiry: Some(date),
        },
        None => ParsedNickname {
            base_name: raw.to_owned(),
            expiry: None,
        },
    }
}

fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let parts = token
        .split('-')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<u32>>>()?;

    let (year, month, day) = match parts[..] {
        [month, day] => (REFERENCE_YEAR, month, day),
        [year, month, day] => (2000 + year as i32, month, day),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{ParsedNickname, parse_nickname};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn unchanged(raw: &str) -> ParsedNickname {
        ParsedNickname {
            base_name: raw.to_owned(),
            expiry: None,
        }
    }

    #[test]
    fn absent_nickname_yields_empty_base() {
        assert_eq!(
            parse_nickname(None),
            ParsedNickname {
                base_name: String::new(),
                expiry: None,
            }
        );
    }

    #[test]
    fn month_day_token_uses_reference_year() {
        let parsed = parse_nickname(Some("Alice 3-15"));
        assert_eq!(parsed.base_name, "Alice");
        assert_eq!(parsed.expiry, Some(date(2025, 3, 15)));
    }

    #[test]
    fn parsed_dates_format_zero_padded() {
        let parsed = parse_nickname(Some("Alice 3-5"));
        let formatted = parsed.expiry.unwrap().format("%Y-%m-%d").to_string();
        assert_eq!(formatted, "2025-03-05");
    }

    #[test]
    fn two_digit_year_token_uses_century_2000() {
        let parsed = parse_nickname(Some("Dana 26-1-9"));
        assert_eq!(parsed.base_name, "Dana");
        assert_eq!(parsed.expiry, Some(date(2026, 1, 9)));
    }

    #[test]
    fn multi_word_base_rejoins_with_single_spaces() {
        let parsed = parse_nickname(Some("Alice  B.  Smith 12-1"));
        assert_eq!(parsed.base_name, "Alice B. Smith");
        assert_eq!(parsed.expiry, Some(date(2025, 12, 1)));
    }

    #[test]
    fn date_only_nickname_has_empty_base() {
        let parsed = parse_nickname(Some("3-15"));
        assert_eq!(parsed.base_name, "");
        assert_eq!(parsed.expiry, Some(date(2025, 3, 15)));
    }

    #[test]
    fn lone_dash_fails_soft() {
        assert_eq!(parse_nickname(Some("Alice -")), unchanged("Alice -"));
    }

    #[test]
    fn impossible_day_fails_soft() {
        assert_eq!(parse_nickname(Some("Alice 02-30")), unchanged("Alice 02-30"));
    }

    #[test]
    fn impossible_day_with_year_fails_soft() {
        assert_eq!(
            parse_nickname(Some("Alice 24-02-30")),
            unchanged("Alice 24-02-30")
        );
    }

    #[test]
    fn hyphenated_word_fails_soft() {
        assert_eq!(
            parse_nickname(Some("Bob-the-builder")),
            unchanged("Bob-the-builder")
        );
    }

    #[test]
    fn hyphens_in_base_do_not_affect_parsing() {
        let parsed = parse_nickname(Some("Mary-Jane 4-1"));
        assert_eq!(parsed.base_name, "Mary-Jane");
        assert_eq!(parsed.expiry, Some(date(2025, 4, 1)));
    }

    #[test]
    fn too_many_separators_fails_soft() {
        assert_eq!(parse_nickname(Some("Eve 1-2-3-4")), unchanged("Eve 1-2-3-4"));
    }

    #[test]
    fn whitespace_only_nickname_is_kept() {
        assert_eq!(parse_nickname(Some("   ")), unchanged("   "));
    }
}
