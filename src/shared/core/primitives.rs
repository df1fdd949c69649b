use serde::{Deserialize, Serialize};
use std::fmt;

/// Certificate count. Always non-negative.
pub type Quantity = u32;

/// Money in integer cents.
pub type Cents = u64;

/// Authenticated user identity as supplied by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Resolves a raw identity, trimming whitespace. A missing or blank
    /// identity resolves to `None`.
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clamps a caller-supplied quantity to the non-negative range.
pub fn clamp_quantity(raw: i64) -> Quantity {
    Quantity::try_from(raw.max(0)).unwrap_or(Quantity::MAX)
}

/// Clamps a caller-supplied quantity to at least one certificate.
pub fn clamp_quantity_at_least_one(raw: Option<i64>) -> Quantity {
    clamp_quantity(raw.unwrap_or(1)).max(1)
}

/// Trims an optional label, treating blank text as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some(" user-1 "), Some("user-1"))]
    fn it_should_resolve_the_user_identity(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let resolved = UserId::resolve(raw);
        assert_eq!(resolved.as_ref().map(UserId::as_str), expected);
    }

    #[rstest]
    #[case(-5, 0)]
    #[case(0, 0)]
    #[case(7, 7)]
    #[case(i64::MAX, Quantity::MAX)]
    fn it_should_clamp_quantities_at_zero(#[case] raw: i64, #[case] expected: Quantity) {
        assert_eq!(clamp_quantity(raw), expected);
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some(-3), 1)]
    #[case(Some(0), 1)]
    #[case(Some(4), 4)]
    fn it_should_clamp_add_quantities_at_one(#[case] raw: Option<i64>, #[case] expected: Quantity) {
        assert_eq!(clamp_quantity_at_least_one(raw), expected);
    }

    #[rstest]
    fn it_should_drop_blank_labels() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" João & Maria ".into())), Some("João & Maria".into()));
        assert_eq!(non_blank(None), None);
    }
}
