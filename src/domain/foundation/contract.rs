//! Rule checks for value objects and commands.
//!
//! The free functions in [`rules`] are pure predicates. [`Contract`] chains
//! them: every rule is evaluated, each failure appends one notification, and
//! nothing returns early, so the caller always sees every defect.

use rust_decimal::Decimal;

use super::notification::{Notifiable, Notifications};
use super::Timestamp;

/// Stateless validation predicates.
pub mod rules {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("e-mail pattern compiles")
    });

    /// True for empty or whitespace-only input.
    pub fn is_blank(value: &str) -> bool {
        value.trim().is_empty()
    }

    /// Character count of the trimmed value, inclusive bounds.
    pub fn has_length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.trim().chars().count();
        len >= min && len <= max
    }

    /// True when the value looks like a deliverable e-mail address.
    pub fn is_email(value: &str) -> bool {
        EMAIL_PATTERN.is_match(value.trim())
    }

    /// True when every character is an ASCII digit and there is at least one.
    pub fn is_digits(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }

    /// Drops surrounding whitespace and the `.`, `-` and `/` separators of a
    /// formatted document number (`529.982.247-25` becomes `52998224725`).
    pub fn strip_document_punctuation(value: &str) -> String {
        value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | '/'))
            .collect()
    }

    /// Validates a CPF: 11 digits, two mod-11 check digits.
    pub fn is_cpf(value: &str) -> bool {
        let digits = match parse_digits(value, 11) {
            Some(d) => d,
            None => return false,
        };
        if digits.iter().all(|d| *d == digits[0]) {
            return false;
        }
        let first = cpf_check_digit(&digits[..9]);
        let second = cpf_check_digit(&digits[..10]);
        digits[9] == first && digits[10] == second
    }

    /// Validates a CNPJ: 14 digits, two weighted mod-11 check digits.
    pub fn is_cnpj(value: &str) -> bool {
        const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
        const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

        let digits = match parse_digits(value, 14) {
            Some(d) => d,
            None => return false,
        };
        if digits.iter().all(|d| *d == digits[0]) {
            return false;
        }
        let first = weighted_check_digit(&digits[..12], &FIRST_WEIGHTS);
        let second = weighted_check_digit(&digits[..13], &SECOND_WEIGHTS);
        digits[12] == first && digits[13] == second
    }

    fn parse_digits(value: &str, expected_len: usize) -> Option<Vec<u32>> {
        let stripped = strip_document_punctuation(value);
        if stripped.len() != expected_len || !is_digits(&stripped) {
            return None;
        }
        Some(stripped.chars().filter_map(|c| c.to_digit(10)).collect())
    }

    fn cpf_check_digit(digits: &[u32]) -> u32 {
        let weight_start = digits.len() as u32 + 1;
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, d)| d * (weight_start - i as u32))
            .sum();
        mod11_digit(sum)
    }

    fn weighted_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
        let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
        mod11_digit(sum)
    }

    fn mod11_digit(sum: u32) -> u32 {
        match sum % 11 {
            0 | 1 => 0,
            r => 11 - r,
        }
    }
}

/// Chainable rule set that records one notification per failed rule.
///
/// # Example
///
/// ```
/// use payment_context::domain::foundation::{Contract, Notifiable};
///
/// let contract = Contract::new()
///     .requires("", "Name.FirstName", "Nome é obrigatório")
///     .is_email("not-an-email", "Email.Address", "E-mail inválido");
///
/// assert_eq!(contract.notifications().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Contract {
    notifications: Notifications,
}

impl Contract {
    /// Starts an empty contract.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure when `holds` is false.
    pub fn is_true(mut self, holds: bool, key: &str, message: &str) -> Self {
        if !holds {
            self.notifications.add(key, message);
        }
        self
    }

    /// Value must not be blank.
    pub fn requires(self, value: &str, key: &str, message: &str) -> Self {
        self.is_true(!rules::is_blank(value), key, message)
    }

    /// Trimmed character count must lie within `min..=max`.
    pub fn has_length_between(
        self,
        value: &str,
        min: usize,
        max: usize,
        key: &str,
        message: &str,
    ) -> Self {
        self.is_true(rules::has_length_between(value, min, max), key, message)
    }

    /// Value must be a well-formed e-mail address.
    pub fn is_email(self, value: &str, key: &str, message: &str) -> Self {
        self.is_true(rules::is_email(value), key, message)
    }

    /// Value must consist of digits only.
    pub fn is_digits(self, value: &str, key: &str, message: &str) -> Self {
        self.is_true(rules::is_digits(value), key, message)
    }

    /// Amount must be strictly greater than `floor`.
    pub fn is_greater_than(self, value: Decimal, floor: Decimal, key: &str, message: &str) -> Self {
        self.is_true(value > floor, key, message)
    }

    /// Amount must be greater than or equal to `floor`.
    pub fn is_greater_or_equal(
        self,
        value: Decimal,
        floor: Decimal,
        key: &str,
        message: &str,
    ) -> Self {
        self.is_true(value >= floor, key, message)
    }

    /// `later` must be strictly after `earlier`.
    pub fn is_after(
        self,
        later: &Timestamp,
        earlier: &Timestamp,
        key: &str,
        message: &str,
    ) -> Self {
        self.is_true(later.is_after(earlier), key, message)
    }

    /// Appends every notification of another validated object.
    pub fn join(mut self, source: &dyn Notifiable) -> Self {
        self.notifications.add_all(source);
        self
    }

    /// Consumes the contract, returning the recorded failures.
    pub fn into_notifications(self) -> Notifications {
        self.notifications
    }
}

impl Notifiable for Contract {
    fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}
