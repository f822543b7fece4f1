//! Intake validation for registration requests
//!
//! Pure functions, no I/O: a request is validated and normalized before any
//! state is created. Failures name the first offending rule.

use crate::domain::entities::account::AccountType;
use crate::errors::ValidationError;

use super::email_utils::{is_valid_email_format, normalize_email};

/// Minimum accepted password length; no other strength rule is enforced
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// A validated and normalized registration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub first_name: String,
    pub last_name: String,
    /// Normalized (lowercase) e-mail address
    pub email: String,
    pub phone: String,
    pub password: String,
    pub account_type: AccountType,
}

/// Validate the six registration inputs and return them normalized
///
/// Checks, in order: presence of every field, e-mail shape, password
/// length, account type. No side effects.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    password: &str,
    account_type: &str,
) -> Result<ValidatedRegistration, ValidationError> {
    let fields = [
        ("first_name", first_name),
        ("last_name", last_name),
        ("email", email),
        ("phone", phone),
        ("password", password),
        ("account_type", account_type),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: name.to_string(),
            });
        }
    }

    let email = normalize_email(email);
    if !is_valid_email_format(&email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(ValidationError::WeakPassword {
            min: PASSWORD_MIN_LENGTH,
        });
    }

    let account_type = AccountType::parse(account_type).ok_or_else(|| {
        ValidationError::AccountTypeInvalid {
            value: account_type.trim().to_string(),
        }
    })?;

    Ok(ValidatedRegistration {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        email,
        phone: phone.trim().to_string(),
        password: password.to_string(),
        account_type,
    })
}

/// Validate a lone e-mail address (resend path) and return it normalized
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "email".to_string(),
        });
    }

    let email = normalize_email(email);
    if !is_valid_email_format(&email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
        password: &str,
        account_type: &str,
    ) -> Result<ValidatedRegistration, ValidationError> {
        validate_registration(first_name, last_name, email, phone, password, account_type)
    }

    #[test]
    fn test_valid_registration() {
        let validated = validate(
            "Ayşe",
            "Yıldız",
            "ayse@example.com",
            "5551234567",
            "password1",
            "buyer",
        )
        .unwrap();

        assert_eq!(validated.email, "ayse@example.com");
        assert_eq!(validated.account_type, AccountType::Buyer);
    }

    #[test]
    fn test_email_is_normalized() {
        let validated = validate(
            "Ayşe",
            "Yıldız",
            "  Ayse@Example.COM ",
            "5551234567",
            "password1",
            "seller",
        )
        .unwrap();

        assert_eq!(validated.email, "ayse@example.com");
    }

    #[test]
    fn test_missing_fields() {
        for (index, field) in ["first_name", "last_name", "email", "phone", "password", "account_type"]
            .iter()
            .enumerate()
        {
            let mut inputs = ["Ayşe", "Yıldız", "ayse@example.com", "5551234567", "password1", "buyer"];
            inputs[index] = "   ";

            let result = validate(
                inputs[0], inputs[1], inputs[2], inputs[3], inputs[4], inputs[5],
            );
            assert_eq!(
                result,
                Err(ValidationError::MissingField {
                    field: field.to_string()
                })
            );
        }
    }

    #[test]
    fn test_invalid_email_format() {
        let result = validate(
            "Ayşe",
            "Yıldız",
            "ayse@example",
            "5551234567",
            "password1",
            "buyer",
        );
        assert_eq!(result, Err(ValidationError::InvalidEmailFormat));
    }

    #[test]
    fn test_weak_password() {
        // 6 characters, under the minimum of 8
        let result = validate(
            "Ayşe",
            "Yıldız",
            "ayse@example.com",
            "5551234567",
            "short1",
            "buyer",
        );
        assert_eq!(
            result,
            Err(ValidationError::WeakPassword {
                min: PASSWORD_MIN_LENGTH
            })
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 multibyte characters pass even though the byte length is larger
        let result = validate(
            "Ayşe",
            "Yıldız",
            "ayse@example.com",
            "5551234567",
            "şifreler",
            "buyer",
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_account_type() {
        let result = validate(
            "Ayşe",
            "Yıldız",
            "ayse@example.com",
            "5551234567",
            "password1",
            "landlord",
        );
        assert_eq!(
            result,
            Err(ValidationError::AccountTypeInvalid {
                value: "landlord".to_string()
            })
        );
    }

    #[test]
    fn test_validate_email_only() {
        assert_eq!(
            validate_email(" Ayse@Example.com "),
            Ok("ayse@example.com".to_string())
        );
        assert_eq!(
            validate_email(""),
            Err(ValidationError::MissingField {
                field: "email".to_string()
            })
        );
        assert_eq!(
            validate_email("ayse@example"),
            Err(ValidationError::InvalidEmailFormat)
        );
    }
}
