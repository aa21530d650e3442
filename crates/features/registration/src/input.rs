use crate::field::Field;

/// Current values of the form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub terms_accepted: bool,
}

impl RegistrationInput {
    /// Text of a text field; `None` for the terms checkbox.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Phone => &self.phone,
            Field::Terms => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Phone => Some(&mut self.phone),
            Field::Terms => None,
        }
    }

    /// Drops the confirmation and the terms flag. Only called on validated input.
    pub(crate) fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Body of the registration request.
#[mfit_derive::api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}
