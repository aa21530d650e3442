//! User-facing strings of the registration page, one catalog per [`Locale`].

use crate::field::Field;
use mfit_domain::config::Locale;

#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub locale: Locale,

    pub name_required: &'static str,
    pub name_too_short: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub password_required: &'static str,
    pub password_too_short: &'static str,
    pub confirm_required: &'static str,
    pub passwords_mismatch: &'static str,
    pub phone_required: &'static str,
    pub phone_not_digits: &'static str,
    pub phone_too_short: &'static str,
    pub phone_too_long: &'static str,
    pub terms_not_accepted: &'static str,

    /// Shown when a failed submission carries no server message.
    pub submit_fallback: &'static str,
    /// Handed to the login page after a successful registration.
    pub registered_notice: &'static str,

    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub password_label: &'static str,
    pub confirm_label: &'static str,
    pub phone_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub password_placeholder: &'static str,
    pub confirm_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub terms_link: &'static str,
    pub terms_suffix: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub have_account: &'static str,
    pub login_link: &'static str,
}

static TR: Messages = Messages {
    locale: Locale::Tr,
    name_required: "İsim gerekli",
    name_too_short: "İsim en az 2 karakter olmalıdır",
    email_required: "E-posta adresi gerekli",
    email_invalid: "Geçerli bir e-posta adresi girin",
    password_required: "Şifre gerekli",
    password_too_short: "Şifre en az 6 karakter olmalıdır",
    confirm_required: "Şifre onayı gerekli",
    passwords_mismatch: "Şifreler eşleşmiyor",
    phone_required: "Telefon numarası gerekli",
    phone_not_digits: "Sadece rakam giriniz",
    phone_too_short: "Telefon numarası en az 10 karakter olmalıdır",
    phone_too_long: "Telefon numarası en fazla 15 karakter olabilir",
    terms_not_accepted: "Devam etmek için şartları kabul etmelisiniz",
    submit_fallback: "Kayıt sırasında bir hata oluştu. Lütfen tekrar deneyin.",
    registered_notice: "Kayıt başarılı! Şimdi giriş yapabilirsiniz.",
    title: "Hesap Oluştur",
    subtitle: "MatFit ailesine katılın",
    name_label: "İsim Soyisim",
    email_label: "E-posta Adresi",
    password_label: "Şifre",
    confirm_label: "Şifre Tekrarı",
    phone_label: "Telefon Numarası",
    name_placeholder: "İsim Soyisim",
    email_placeholder: "ornek@email.com",
    password_placeholder: "Şifrenizi girin",
    confirm_placeholder: "Şifrenizi tekrar girin",
    phone_placeholder: "5XX XXX XX XX",
    terms_link: "Şartlar ve Koşullar",
    terms_suffix: "'ı okudum ve kabul ediyorum",
    submit_label: "Hesap Oluştur",
    busy_label: "Kaydediliyor...",
    have_account: "Zaten bir hesabınız var mı?",
    login_link: "Giriş Yap",
};

static EN: Messages = Messages {
    locale: Locale::En,
    name_required: "Name is required",
    name_too_short: "Name must be at least 2 characters",
    email_required: "Email address is required",
    email_invalid: "Enter a valid email address",
    password_required: "Password is required",
    password_too_short: "Password must be at least 6 characters",
    confirm_required: "Password confirmation is required",
    passwords_mismatch: "Passwords do not match",
    phone_required: "Phone number is required",
    phone_not_digits: "Digits only",
    phone_too_short: "Phone number must be at least 10 characters",
    phone_too_long: "Phone number can be at most 15 characters",
    terms_not_accepted: "You must accept the terms to continue",
    submit_fallback: "Something went wrong during registration. Please try again.",
    registered_notice: "Registration successful! You can sign in now.",
    title: "Create Account",
    subtitle: "Join the MatFit family",
    name_label: "Full Name",
    email_label: "Email Address",
    password_label: "Password",
    confirm_label: "Confirm Password",
    phone_label: "Phone Number",
    name_placeholder: "Full Name",
    email_placeholder: "example@email.com",
    password_placeholder: "Enter your password",
    confirm_placeholder: "Enter your password again",
    phone_placeholder: "5XX XXX XX XX",
    terms_link: "Terms and Conditions",
    terms_suffix: " - I have read and accept them",
    submit_label: "Create Account",
    busy_label: "Saving...",
    have_account: "Already have an account?",
    login_link: "Sign In",
};

impl Messages {
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::Tr => &TR,
            Locale::En => &EN,
        }
    }

    #[must_use]
    pub const fn label(&self, field: Field) -> &'static str {
        match field {
            Field::Name => self.name_label,
            Field::Email => self.email_label,
            Field::Password => self.password_label,
            Field::ConfirmPassword => self.confirm_label,
            Field::Phone => self.phone_label,
            Field::Terms => self.terms_link,
        }
    }

    /// Placeholder text; empty for the checkbox.
    #[must_use]
    pub const fn placeholder(&self, field: Field) -> &'static str {
        match field {
            Field::Name => self.name_placeholder,
            Field::Email => self.email_placeholder,
            Field::Password => self.password_placeholder,
            Field::ConfirmPassword => self.confirm_placeholder,
            Field::Phone => self.phone_placeholder,
            Field::Terms => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_turkish() {
        let messages = Messages::for_locale(Locale::default());
        assert_eq!(messages.locale, Locale::Tr);
        assert_eq!(messages.busy_label, "Kaydediliyor...");
    }

    #[test]
    fn catalogs_report_their_locale() {
        for locale in [Locale::Tr, Locale::En] {
            assert_eq!(Messages::for_locale(locale).locale, locale);
        }
    }

    #[test]
    fn every_text_field_has_label_and_placeholder() {
        for locale in [Locale::Tr, Locale::En] {
            let messages = Messages::for_locale(locale);
            for field in Field::all().filter(|field| field.is_text()) {
                assert!(!messages.label(field).is_empty(), "{locale}: {field} label");
                assert!(!messages.placeholder(field).is_empty(), "{locale}: {field} placeholder");
            }
        }
    }
}
