//! Field validators.
//!
//! Each validator interprets one raw string against a target type and
//! returns `None` when the value is not acceptable. Validators never trim,
//! normalize, or coerce their input.

/// A closed set of string spellings mapped onto an enum.
pub trait Choice: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The exact spelling accepted for this variant.
    fn as_str(&self) -> &'static str;

    /// Spellings of every variant.
    #[must_use]
    fn spellings() -> Vec<&'static str> {
        Self::ALL.iter().map(|choice| choice.as_str()).collect()
    }
}

/// Accepts non-empty strings made only of ASCII digits.
///
/// Values that overflow `u32` are rejected.
///
/// # Examples
///
/// ```
/// use commcfg::validate::parse_integer;
///
/// assert_eq!(parse_integer("8080"), Some(8080));
/// assert_eq!(parse_integer("007"), Some(7));
/// assert_eq!(parse_integer("-1"), None);
/// assert_eq!(parse_integer("80x0"), None);
/// assert_eq!(parse_integer(""), None);
/// ```
#[must_use]
pub fn parse_integer(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Accepts only an exact, case-sensitive spelling of a `T` variant.
///
/// # Examples
///
/// ```
/// use commcfg::validate::parse_choice;
/// use commcfg::Protocol;
///
/// assert_eq!(parse_choice::<Protocol>("UDP"), Some(Protocol::Udp));
/// assert_eq!(parse_choice::<Protocol>("udp"), None);
/// ```
#[must_use]
pub fn parse_choice<T: Choice>(raw: &str) -> Option<T> {
    T::ALL.iter().copied().find(|choice| choice.as_str() == raw)
}

/// Accepts any non-empty string.
#[must_use]
pub fn parse_text(raw: &str) -> Option<&str> {
    (!raw.is_empty()).then_some(raw)
}

/// The shape a required field is validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Unsigned decimal integer.
    Integer,
    /// One of a fixed set of spellings.
    Choice(Vec<&'static str>),
    /// Any non-empty string.
    Text,
}

impl FieldShape {
    /// Builds the shape for a [`Choice`] type.
    #[must_use]
    pub fn choice_of<T: Choice>() -> Self {
        Self::Choice(T::spellings())
    }

    /// Returns `true` if `raw` passes the validator for this shape.
    #[must_use]
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            Self::Integer => parse_integer(raw).is_some(),
            Self::Choice(allowed) => allowed.contains(&raw),
            Self::Text => parse_text(raw).is_some(),
        }
    }

    /// Short human description, used in field reports.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer => "integer".to_string(),
            Self::Choice(allowed) => format!("one of {}", allowed.join("|")),
            Self::Text => "non-empty text".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Parity, Protocol};

    #[test]
    fn test_parse_integer_valid() {
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("9600"), Some(9600));
        assert_eq!(parse_integer("0080"), Some(80));
        assert_eq!(parse_integer("4294967295"), Some(u32::MAX));
    }

    #[test]
    fn test_parse_integer_rejects_non_digits() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("+1"), None);
        assert_eq!(parse_integer("-1"), None);
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("80x0"), None);
        assert_eq!(parse_integer(" 80"), None);
        assert_eq!(parse_integer("80 "), None);
        assert_eq!(parse_integer("٣"), None);
    }

    #[test]
    fn test_parse_integer_rejects_overflow() {
        assert_eq!(parse_integer("4294967296"), None);
        assert_eq!(parse_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_choice_exact_match() {
        assert_eq!(parse_choice::<Protocol>("TCP"), Some(Protocol::Tcp));
        assert_eq!(parse_choice::<Protocol>("UDP"), Some(Protocol::Udp));
        assert_eq!(parse_choice::<Parity>("None"), Some(Parity::None));
        assert_eq!(parse_choice::<Parity>("Even"), Some(Parity::Even));
        assert_eq!(parse_choice::<Parity>("Odd"), Some(Parity::Odd));
    }

    #[test]
    fn test_parse_choice_is_strict() {
        assert_eq!(parse_choice::<Protocol>("tcp"), None);
        assert_eq!(parse_choice::<Protocol>("TCP "), None);
        assert_eq!(parse_choice::<Protocol>("HTTP"), None);
        assert_eq!(parse_choice::<Protocol>(""), None);
        assert_eq!(parse_choice::<Parity>("even"), None);
        assert_eq!(parse_choice::<Parity>("X"), None);
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text("10.0.0.1"), Some("10.0.0.1"));
        assert_eq!(parse_text(" "), Some(" "));
        assert_eq!(parse_text("not an ip"), Some("not an ip"));
        assert_eq!(parse_text(""), None);
    }

    #[test]
    fn test_field_shape_accepts() {
        assert!(FieldShape::Integer.accepts("12"));
        assert!(!FieldShape::Integer.accepts("1a"));
        assert!(FieldShape::Text.accepts("x"));
        assert!(!FieldShape::Text.accepts(""));

        let parity = FieldShape::choice_of::<Parity>();
        assert!(parity.accepts("Odd"));
        assert!(!parity.accepts("odd"));
    }

    #[test]
    fn test_field_shape_describe() {
        assert_eq!(
            FieldShape::choice_of::<Protocol>().describe(),
            "one of TCP|UDP"
        );
        assert_eq!(FieldShape::Integer.describe(), "integer");
    }
}
