//! Text form state
//!
//! A focused list of labelled text inputs, reused by the order form and
//! the settings sub-pages.

use tui_input::Input;

pub struct FormField {
    /// Machine key, matches the validation field keys
    pub key: &'static str,
    /// Polish label shown next to the input
    pub label: &'static str,
    pub input: Input,
}

pub struct TextForm {
    fields: Vec<FormField>,
    focus: usize,
}

impl TextForm {
    /// Build a form from `(key, label, initial_value)` specs.
    pub fn new(specs: &[(&'static str, &'static str, &str)]) -> Self {
        let fields = specs
            .iter()
            .map(|&(key, label, value)| FormField {
                key,
                label,
                input: Input::new(value.to_string()),
            })
            .collect();
        Self { fields, focus: 0 }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> &FormField {
        &self.fields[self.focus]
    }

    pub fn focused_input_mut(&mut self) -> &mut Input {
        &mut self.fields[self.focus].input
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Current value of a field by key; empty string when the key is
    /// unknown.
    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.input.value())
            .unwrap_or("")
    }

    /// Replace a field's content.
    pub fn set_value(&mut self, key: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.input = Input::new(value.to_string());
        }
    }

    /// Clear every field.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.input.reset();
        }
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TextForm {
        TextForm::new(&[
            ("customer_name", "Imię i Nazwisko", ""),
            ("customer_email", "Email", "jan@example.com"),
        ])
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut f = form();
        assert_eq!(f.focus(), 0);
        f.focus_next();
        assert_eq!(f.focus(), 1);
        f.focus_next();
        assert_eq!(f.focus(), 0);
        f.focus_prev();
        assert_eq!(f.focus(), 1);
    }

    #[test]
    fn values_by_key() {
        let mut f = form();
        assert_eq!(f.value("customer_email"), "jan@example.com");
        f.set_value("customer_name", "Jan Kowalski");
        assert_eq!(f.value("customer_name"), "Jan Kowalski");
        f.clear();
        assert_eq!(f.value("customer_name"), "");
    }
}
