//! Field rules: ordered predicate and message pairs, first failure wins.

use crate::field::Field;
use crate::input::RegistrationInput;
use crate::messages::Messages;
use std::collections::BTreeMap;
use std::fmt;
use validator::ValidateEmail;

pub const NAME_MIN: usize = 2;
pub const PASSWORD_MIN: usize = 6;
pub const PHONE_MIN: usize = 10;
pub const PHONE_MAX: usize = 15;

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidEmail,
    NotDigits,
    Mismatch,
    NotAccepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub violation: Violation,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Errors keyed by field, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub(crate) fn set(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => self.0.insert(field, error),
            None => self.0.remove(&field),
        };
    }
}

struct Rule {
    violation: Violation,
    holds: fn(&RegistrationInput) -> bool,
    message: fn(&Messages) -> &'static str,
}

const NAME: &[Rule] = &[
    Rule {
        violation: Violation::Required,
        holds: |input| !input.name.is_empty(),
        message: |m| m.name_required,
    },
    Rule {
        violation: Violation::TooShort { min: NAME_MIN },
        holds: |input| char_len(&input.name) >= NAME_MIN,
        message: |m| m.name_too_short,
    },
];

const EMAIL: &[Rule] = &[
    Rule {
        violation: Violation::Required,
        holds: |input| !input.email.is_empty(),
        message: |m| m.email_required,
    },
    Rule {
        violation: Violation::InvalidEmail,
        holds: |input| input.email.validate_email(),
        message: |m| m.email_invalid,
    },
];

const PASSWORD: &[Rule] = &[
    Rule {
        violation: Violation::Required,
        holds: |input| !input.password.is_empty(),
        message: |m| m.password_required,
    },
    Rule {
        violation: Violation::TooShort { min: PASSWORD_MIN },
        holds: |input| char_len(&input.password) >= PASSWORD_MIN,
        message: |m| m.password_too_short,
    },
];

const CONFIRM_PASSWORD: &[Rule] = &[
    Rule {
        violation: Violation::Required,
        holds: |input| !input.confirm_password.is_empty(),
        message: |m| m.confirm_required,
    },
    Rule {
        violation: Violation::Mismatch,
        holds: |input| input.confirm_password == input.password,
        message: |m| m.passwords_mismatch,
    },
];

const PHONE: &[Rule] = &[
    Rule {
        violation: Violation::Required,
        holds: |input| !input.phone.is_empty(),
        message: |m| m.phone_required,
    },
    Rule {
        violation: Violation::NotDigits,
        holds: |input| input.phone.chars().all(|c| c.is_ascii_digit()),
        message: |m| m.phone_not_digits,
    },
    Rule {
        violation: Violation::TooShort { min: PHONE_MIN },
        holds: |input| char_len(&input.phone) >= PHONE_MIN,
        message: |m| m.phone_too_short,
    },
    Rule {
        violation: Violation::TooLong { max: PHONE_MAX },
        holds: |input| char_len(&input.phone) <= PHONE_MAX,
        message: |m| m.phone_too_long,
    },
];

const TERMS: &[Rule] = &[Rule {
    violation: Violation::NotAccepted,
    holds: |input| input.terms_accepted,
    message: |m| m.terms_not_accepted,
}];

const fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::Name => NAME,
        Field::Email => EMAIL,
        Field::Password => PASSWORD,
        Field::ConfirmPassword => CONFIRM_PASSWORD,
        Field::Phone => PHONE,
        Field::Terms => TERMS,
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// First rule of `field` that `input` breaks.
#[must_use]
pub fn validate_field(
    input: &RegistrationInput,
    field: Field,
    messages: &Messages,
) -> Option<FieldError> {
    rules(field).iter().find(|rule| !(rule.holds)(input)).map(|rule| FieldError {
        violation: rule.violation,
        message: (rule.message)(messages),
    })
}

/// Checks every field; the result only depends on `input` and the catalog.
#[must_use]
pub fn validate_all(input: &RegistrationInput, messages: &Messages) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::all() {
        errors.set(field, validate_field(input, field, messages));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfit_domain::config::Locale;

    fn tr() -> &'static Messages {
        Messages::for_locale(Locale::Tr)
    }

    fn valid() -> RegistrationInput {
        RegistrationInput {
            name: "Al".to_owned(),
            email: "a@b.com".to_owned(),
            password: "secret".to_owned(),
            confirm_password: "secret".to_owned(),
            phone: "5551234567".to_owned(),
            terms_accepted: true,
        }
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(validate_all(&valid(), tr()).is_empty());
    }

    #[test]
    fn empty_input_fails_every_field_with_required_first() {
        let errors = validate_all(&RegistrationInput::default(), tr());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Name).map(|e| e.message), Some("İsim gerekli"));
        assert_eq!(errors.get(Field::Phone).map(|e| e.violation), Some(Violation::Required));
        assert_eq!(
            errors.get(Field::Terms).map(|e| e.message),
            Some("Devam etmek için şartları kabul etmelisiniz")
        );
    }

    #[test]
    fn short_name_counts_characters_not_bytes() {
        let mut input = valid();
        input.name = "Ş".to_owned();
        let error = validate_field(&input, Field::Name, tr()).expect("too short");
        assert_eq!(error.violation, Violation::TooShort { min: NAME_MIN });

        input.name = "Şu".to_owned();
        assert!(validate_field(&input, Field::Name, tr()).is_none());
    }

    #[test]
    fn email_shape_is_checked() {
        let mut input = valid();
        input.email = "not-an-email".to_owned();
        let error = validate_field(&input, Field::Email, tr()).expect("invalid");
        assert_eq!(error.message, "Geçerli bir e-posta adresi girin");
    }

    #[test]
    fn confirmation_follows_password() {
        let mut input = valid();
        input.confirm_password = "other".to_owned();
        let error = validate_field(&input, Field::ConfirmPassword, tr()).expect("mismatch");
        assert_eq!(error.message, "Şifreler eşleşmiyor");

        input.password = "other".to_owned();
        assert!(validate_field(&input, Field::ConfirmPassword, tr()).is_none());
    }

    #[test]
    fn phone_rules_in_order() {
        let mut input = valid();
        let en = Messages::for_locale(Locale::En);

        input.phone = "555-123".to_owned();
        assert_eq!(validate_field(&input, Field::Phone, en).map(|e| e.message), Some("Digits only"));

        input.phone = "555123456".to_owned();
        assert_eq!(
            validate_field(&input, Field::Phone, en).map(|e| e.violation),
            Some(Violation::TooShort { min: PHONE_MIN })
        );

        input.phone = "5551234567890123".to_owned();
        assert_eq!(
            validate_field(&input, Field::Phone, en).map(|e| e.violation),
            Some(Violation::TooLong { max: PHONE_MAX })
        );
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let mut input = valid();
        input.phone = "٥٥٥١٢٣٤٥٦٧".to_owned();
        assert_eq!(
            validate_field(&input, Field::Phone, tr()).map(|e| e.violation),
            Some(Violation::NotDigits)
        );
    }
}
