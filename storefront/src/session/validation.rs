//! Customer form validation
//!
//! A pure function over the form input returning field-keyed messages in
//! the storefront locale. No state is touched; the session manager calls
//! this at submission time and the form re-runs it for inline feedback.

use chrono::NaiveDate;
use shared::order::{CustomerInfo, FieldErrors};

use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    is_email_shaped,
};

/// Minimum lengths mirrored from the order form's rules
const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 9;
const MIN_ADDRESS_CHARS: usize = 5;

/// Validate the customer form.
///
/// `today` is injected so the past-date rule is testable; callers pass the
/// current local date. An empty result means the input passed.
pub fn validate_customer_info(info: &CustomerInfo, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = info.customer_name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        errors.add(
            "customer_name",
            "Imię i nazwisko musi mieć co najmniej 2 znaki.",
        );
    } else if name.len() > MAX_NAME_LEN {
        errors.add("customer_name", "Imię i nazwisko jest zbyt długie.");
    }

    let email = info.customer_email.trim();
    if !is_email_shaped(email) || email.len() > MAX_EMAIL_LEN {
        errors.add("customer_email", "Nieprawidłowy adres email.");
    }

    let phone = info.customer_phone.trim();
    if phone.chars().count() < MIN_PHONE_CHARS {
        errors.add(
            "customer_phone",
            "Numer telefonu musi mieć co najmniej 9 cyfr.",
        );
    } else if phone.len() > MAX_SHORT_TEXT_LEN {
        errors.add("customer_phone", "Numer telefonu jest zbyt długi.");
    }

    let address = info.delivery_address.trim();
    if address.chars().count() < MIN_ADDRESS_CHARS {
        errors.add(
            "delivery_address",
            "Adres dostawy musi mieć co najmniej 5 znaków.",
        );
    } else if address.len() > MAX_ADDRESS_LEN {
        errors.add("delivery_address", "Adres dostawy jest zbyt długi.");
    }

    if info.delivery_date < today {
        errors.add(
            "delivery_date",
            "Data dostawy nie może być wcześniejsza niż dzisiaj.",
        );
    }

    if let Some(notes) = &info.notes
        && notes.len() > MAX_NOTE_LEN
    {
        errors.add("notes", "Uwagi do zamówienia są zbyt długie.");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn valid_info() -> CustomerInfo {
        CustomerInfo {
            customer_name: "Jan Kowalski".to_string(),
            customer_email: "jan.kowalski@example.com".to_string(),
            customer_phone: "123-456-789".to_string(),
            delivery_address: "ul. Przykładowa 1, 00-000 Warszawa".to_string(),
            delivery_date: today(),
            notes: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate_customer_info(&valid_info(), today()).is_empty());
    }

    #[test]
    fn rejects_short_name() {
        let info = CustomerInfo {
            customer_name: " J ".to_string(),
            ..valid_info()
        };
        let errors = validate_customer_info(&info, today());
        assert!(errors.get("customer_name").is_some());
    }

    #[test]
    fn rejects_malformed_email() {
        let info = CustomerInfo {
            customer_email: "not-an-email".to_string(),
            ..valid_info()
        };
        let errors = validate_customer_info(&info, today());
        assert_eq!(errors.get("customer_email"), Some("Nieprawidłowy adres email."));
    }

    #[test]
    fn rejects_short_phone() {
        let info = CustomerInfo {
            customer_phone: "12345678".to_string(),
            ..valid_info()
        };
        assert!(validate_customer_info(&info, today()).get("customer_phone").is_some());
    }

    #[test]
    fn rejects_short_address() {
        let info = CustomerInfo {
            delivery_address: "ul.".to_string(),
            ..valid_info()
        };
        assert!(
            validate_customer_info(&info, today())
                .get("delivery_address")
                .is_some()
        );
    }

    #[test]
    fn rejects_past_delivery_date() {
        let info = CustomerInfo {
            delivery_date: today().pred_opt().unwrap(),
            ..valid_info()
        };
        let errors = validate_customer_info(&info, today());
        assert!(errors.get("delivery_date").is_some());
    }

    #[test]
    fn accepts_today_and_future_delivery() {
        assert!(validate_customer_info(&valid_info(), today()).is_empty());
        let info = CustomerInfo {
            delivery_date: today().succ_opt().unwrap(),
            ..valid_info()
        };
        assert!(validate_customer_info(&info, today()).is_empty());
    }

    #[test]
    fn collects_multiple_failures() {
        let info = CustomerInfo {
            customer_name: "X".to_string(),
            customer_email: "bad".to_string(),
            ..valid_info()
        };
        let errors = validate_customer_info(&info, today());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn notes_are_optional_but_bounded() {
        let info = CustomerInfo {
            notes: Some("x".repeat(MAX_NOTE_LEN + 1)),
            ..valid_info()
        };
        assert!(validate_customer_info(&info, today()).get("notes").is_some());
    }
}
