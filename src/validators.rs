//! Field validators
//!
//! Pure functions that turn the raw text of a ComicInfo element or attribute
//! into a typed value. Absent and empty text are treated alike and produce the
//! field's default.

use crate::error::{Error, Result};
use crate::schema::{
    elements, AGE_RATING_VALUES, DEFAULT_ENUM, DEFAULT_INTEGER, DEFAULT_PAGE_TYPE, MANGA_VALUES,
    PAGE_TYPE_VALUES, YES_NO_VALUES,
};
use indexmap::IndexSet;

/// Field name reported for page type errors
const PAGE_TYPE_FIELD: &str = "Type";

/// Inclusive CommunityRating bounds
pub const COMMUNITY_RATING_RANGE: (f64, f64) = (0.0, 5.0);
/// Inclusive Year bounds
pub const YEAR_RANGE: (i64, i64) = (1000, 9999);
/// Inclusive Month bounds
pub const MONTH_RANGE: (i64, i64) = (1, 12);
/// Inclusive Day bounds. Not month aware.
pub const DAY_RANGE: (i64, i64) = (1, 31);

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

fn validate_enum(
    text: Option<&str>,
    field: &str,
    values: &IndexSet<&'static str>,
) -> Result<String> {
    match present(text) {
        None => Ok(DEFAULT_ENUM.to_string()),
        Some(value) if values.contains(value) => Ok(value.to_string()),
        Some(value) => Err(Error::invalid_enum(field, value, values)),
    }
}

// =============================================================================
// Enum Validators
// =============================================================================

/// Validate a YesNo value (BlackAndWhite)
pub fn validate_yes_no(text: Option<&str>) -> Result<String> {
    validate_enum(text, elements::BLACK_AND_WHITE, &YES_NO_VALUES)
}

/// Validate a Manga value
pub fn validate_manga(text: Option<&str>) -> Result<String> {
    validate_enum(text, elements::MANGA, &MANGA_VALUES)
}

/// Validate an AgeRating value
pub fn validate_age_rating(text: Option<&str>) -> Result<String> {
    validate_enum(text, elements::AGE_RATING, &AGE_RATING_VALUES)
}

/// Validate a page Type, which may be a whitespace-separated list of types.
///
/// On success the original text is returned unchanged. Text made only of
/// whitespace counts as absent.
pub fn validate_comic_page_type(text: Option<&str>) -> Result<String> {
    let Some(value) = present(text).filter(|t| !t.trim().is_empty()) else {
        return Ok(DEFAULT_PAGE_TYPE.to_string());
    };

    if let Some(bad) = value
        .split_whitespace()
        .find(|token| !PAGE_TYPE_VALUES.contains(*token))
    {
        return Err(Error::invalid_enum(
            PAGE_TYPE_FIELD,
            bad,
            &*PAGE_TYPE_VALUES,
        ));
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validate the CommunityRating decimal.
///
/// Absent text yields `None`, which is distinct from a rating of zero.
pub fn validate_community_rating(text: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = present(text) else {
        return Ok(None);
    };

    let field = elements::COMMUNITY_RATING;
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::type_coercion(field, raw, "Float"))?;

    let (min, max) = COMMUNITY_RATING_RANGE;
    if !(min..=max).contains(&value) {
        return Err(Error::range(field, value, min, max));
    }

    Ok(Some(value))
}

/// Validate an integer, substituting `default` when the text is absent
pub fn validate_integer(text: Option<&str>, field: &str, default: i64) -> Result<i64> {
    match present(text) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::type_coercion(field, raw, "Integer")),
    }
}

fn validate_bounded(text: Option<&str>, field: &str, (min, max): (i64, i64)) -> Result<i64> {
    let value = validate_integer(text, field, DEFAULT_INTEGER)?;
    if present(text).is_some() && !(min..=max).contains(&value) {
        return Err(Error::range(field, value as f64, min as f64, max as f64));
    }
    Ok(value)
}

/// Validate a Year, 1000 to 9999
pub fn validate_year(text: Option<&str>) -> Result<i64> {
    validate_bounded(text, elements::YEAR, YEAR_RANGE)
}

/// Validate a Month, 1 to 12
pub fn validate_month(text: Option<&str>) -> Result<i64> {
    validate_bounded(text, elements::MONTH, MONTH_RANGE)
}

/// Validate a Day, 1 to 31 regardless of month
pub fn validate_day(text: Option<&str>) -> Result<i64> {
    validate_bounded(text, elements::DAY, DAY_RANGE)
}

// =============================================================================
// Boolean Validator
// =============================================================================

/// Validate a boolean. Accepts true/1/yes and false/0/no in any case.
pub fn validate_boolean(text: Option<&str>, field: &str) -> Result<bool> {
    let Some(raw) = text else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(Error::type_coercion(field, raw, "Boolean")),
    }
}

// =============================================================================
// List Splitting
// =============================================================================

/// Split a comma-separated list, trimming pieces and dropping empty ones
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a whitespace-separated list
pub fn split_whitespace_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        assert_eq!(validate_yes_no(None).unwrap(), "Unknown");
        assert_eq!(validate_yes_no(Some("")).unwrap(), "Unknown");
        assert_eq!(validate_yes_no(Some("Yes")).unwrap(), "Yes");
        assert_eq!(validate_yes_no(Some("No")).unwrap(), "No");

        match validate_yes_no(Some("Maybe")) {
            Err(Error::InvalidEnum {
                field,
                value,
                valid_values,
            }) => {
                assert_eq!(field, "BlackAndWhite");
                assert_eq!(value, "Maybe");
                assert_eq!(valid_values, vec!["Unknown", "No", "Yes"]);
            }
            other => panic!("expected InvalidEnum, got {:?}", other),
        }
    }

    #[test]
    fn test_enum_is_case_sensitive() {
        assert!(validate_yes_no(Some("yes")).is_err());
        assert!(validate_manga(Some("yesandrighttoleft")).is_err());
    }

    #[test]
    fn test_manga() {
        assert_eq!(validate_manga(None).unwrap(), "Unknown");
        assert_eq!(
            validate_manga(Some("YesAndRightToLeft")).unwrap(),
            "YesAndRightToLeft"
        );
        assert!(matches!(
            validate_manga(Some("Sometimes")),
            Err(Error::InvalidEnum { .. })
        ));
    }

    #[test]
    fn test_age_rating() {
        assert_eq!(validate_age_rating(None).unwrap(), "Unknown");
        assert_eq!(validate_age_rating(Some("Teen")).unwrap(), "Teen");
        assert_eq!(
            validate_age_rating(Some("Adults Only 18+")).unwrap(),
            "Adults Only 18+"
        );
        assert!(validate_age_rating(Some("NC-17")).is_err());
    }

    #[test]
    fn test_page_type_default() {
        assert_eq!(validate_comic_page_type(None).unwrap(), "Story");
        assert_eq!(validate_comic_page_type(Some("")).unwrap(), "Story");
        assert_eq!(validate_comic_page_type(Some("  ")).unwrap(), "Story");
        assert_eq!(validate_comic_page_type(Some("\t\n")).unwrap(), "Story");
    }

    #[test]
    fn test_page_type_list_keeps_original_text() {
        let raw = "FrontCover \t  Story";
        assert_eq!(validate_comic_page_type(Some(raw)).unwrap(), raw);
    }

    #[test]
    fn test_page_type_reports_first_bad_token() {
        match validate_comic_page_type(Some("Story Bogus Junk")) {
            Err(Error::InvalidEnum { field, value, valid_values }) => {
                assert_eq!(field, "Type");
                assert_eq!(value, "Bogus");
                assert_eq!(valid_values.len(), 11);
            }
            other => panic!("expected InvalidEnum, got {:?}", other),
        }
    }

    #[test]
    fn test_community_rating_bounds() {
        assert_eq!(validate_community_rating(None).unwrap(), None);
        assert_eq!(validate_community_rating(Some("")).unwrap(), None);
        assert_eq!(validate_community_rating(Some("0.0")).unwrap(), Some(0.0));
        assert_eq!(validate_community_rating(Some("5.0")).unwrap(), Some(5.0));
        assert_eq!(validate_community_rating(Some("3.5")).unwrap(), Some(3.5));

        for raw in ["5.0001", "-0.0001"] {
            match validate_community_rating(Some(raw)) {
                Err(Error::Range { field, min, max, .. }) => {
                    assert_eq!(field, "CommunityRating");
                    assert_eq!(min, 0.0);
                    assert_eq!(max, 5.0);
                }
                other => panic!("expected Range for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_community_rating_not_a_number() {
        assert!(matches!(
            validate_community_rating(Some("great")),
            Err(Error::TypeCoercion { expected: "Float", .. })
        ));
    }

    #[test]
    fn test_community_rating_non_finite() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity"] {
            match validate_community_rating(Some(raw)) {
                Err(Error::TypeCoercion { field, value, expected }) => {
                    assert_eq!(field, "CommunityRating");
                    assert_eq!(value, raw);
                    assert_eq!(expected, "Float");
                }
                other => panic!("expected TypeCoercion for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(validate_integer(None, "Count", -1).unwrap(), -1);
        assert_eq!(validate_integer(Some(""), "Count", 7).unwrap(), 7);
        assert_eq!(validate_integer(Some("12"), "Count", -1).unwrap(), 12);
        assert_eq!(validate_integer(Some(" 12 "), "Count", -1).unwrap(), 12);
        assert_eq!(validate_integer(Some("-3"), "Count", -1).unwrap(), -3);

        match validate_integer(Some("twelve"), "Count", -1) {
            Err(Error::TypeCoercion { field, value, expected }) => {
                assert_eq!(field, "Count");
                assert_eq!(value, "twelve");
                assert_eq!(expected, "Integer");
            }
            other => panic!("expected TypeCoercion, got {:?}", other),
        }
        assert!(validate_integer(Some("1.5"), "Count", -1).is_err());
    }

    #[test]
    fn test_year() {
        assert_eq!(validate_year(None).unwrap(), -1);
        assert_eq!(validate_year(Some("1000")).unwrap(), 1000);
        assert_eq!(validate_year(Some("9999")).unwrap(), 9999);
        assert!(matches!(
            validate_year(Some("999")),
            Err(Error::Range { min, max, .. }) if min == 1000.0 && max == 9999.0
        ));
        assert!(validate_year(Some("10000")).is_err());
        assert!(matches!(
            validate_year(Some("MMXX")),
            Err(Error::TypeCoercion { .. })
        ));
    }

    #[test]
    fn test_month_and_day() {
        assert_eq!(validate_month(None).unwrap(), -1);
        assert_eq!(validate_month(Some("12")).unwrap(), 12);
        assert!(validate_month(Some("0")).is_err());
        assert!(validate_month(Some("13")).is_err());

        assert_eq!(validate_day(None).unwrap(), -1);
        assert_eq!(validate_day(Some("31")).unwrap(), 31);
        assert!(validate_day(Some("32")).is_err());
        assert!(matches!(
            validate_day(Some("0")),
            Err(Error::Range { ref field, .. }) if field == "Day"
        ));
    }

    #[test]
    fn test_boolean() {
        for raw in ["true", "TRUE", "1", "Yes"] {
            assert!(validate_boolean(Some(raw), "DoublePage").unwrap(), "{}", raw);
        }
        for raw in ["false", "False", "0", "no", ""] {
            assert!(!validate_boolean(Some(raw), "DoublePage").unwrap(), "{}", raw);
        }
        assert!(!validate_boolean(None, "DoublePage").unwrap());
        assert!(matches!(
            validate_boolean(Some("maybe"), "DoublePage"),
            Err(Error::TypeCoercion { expected: "Boolean", .. })
        ));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("Superhero, Action, Adventure"),
            vec!["Superhero", "Action", "Adventure"]
        );
        assert_eq!(split_list(" a ,, b ,"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_split_whitespace_list() {
        assert_eq!(
            split_whitespace_list("https://a.example  https://b.example\n"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(split_whitespace_list("   ").is_empty());
    }
}
