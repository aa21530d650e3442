use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Inputs of the registration form, in the order they are rendered.
///
/// The string form is the key the web client used for each input (`confirmPassword`, `terms`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Terms,
}

impl Field {
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Every field, in form order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Everything but the terms checkbox takes text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Terms)
    }

    /// Whether the value is masked on screen.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// HTML input type used to render the field.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
            Self::Phone => "tel",
            Self::Terms => "checkbox",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn keys_match_form_names() {
        let keys: Vec<_> = Field::all().map(Field::key).collect();
        assert_eq!(keys, ["name", "email", "password", "confirmPassword", "phone", "terms"]);
    }

    #[test]
    fn keys_parse_back() {
        assert_eq!(Field::from_str("confirmPassword"), Ok(Field::ConfirmPassword));
        assert!(Field::from_str("termsAccepted").is_err());
    }

    #[test]
    fn only_terms_is_not_text() {
        assert_eq!(Field::all().filter(|field| !field.is_text()).collect::<Vec<_>>(), [Field::Terms]);
    }
}
