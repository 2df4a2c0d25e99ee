//! Password composition policy.
//!
//! Four independent checks, evaluated on every keystroke so the signup form
//! can show live feedback. Nothing is stored; call
//! [`PasswordRequirements::evaluate`] again whenever the candidate changes.

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters that satisfy the symbol rule.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// One composition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Lowercase,
    Uppercase,
    Symbol,
    Length,
}

impl Requirement {
    /// All rules in display order.
    pub const ALL: [Requirement; 4] = [
        Requirement::Lowercase,
        Requirement::Uppercase,
        Requirement::Symbol,
        Requirement::Length,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Requirement::Lowercase => "Lowercase letter",
            Requirement::Uppercase => "Uppercase letter",
            Requirement::Symbol => "Special symbol",
            Requirement::Length => "8+ characters",
        }
    }
}

/// Result of evaluating a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordRequirements {
    pub lowercase: bool,
    pub uppercase: bool,
    pub symbol: bool,
    pub length: bool,
}

impl PasswordRequirements {
    pub fn evaluate(password: &str) -> Self {
        Self {
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            symbol: password.chars().any(|c| SYMBOLS.contains(c)),
            length: password.chars().count() >= MIN_PASSWORD_LEN,
        }
    }

    pub fn is_met(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Lowercase => self.lowercase,
            Requirement::Uppercase => self.uppercase,
            Requirement::Symbol => self.symbol,
            Requirement::Length => self.length,
        }
    }

    /// True when every rule holds.
    pub fn is_satisfied(&self) -> bool {
        self.lowercase && self.uppercase && self.symbol && self.length
    }

    /// Rules paired with their status, in display order.
    pub fn checks(&self) -> impl Iterator<Item = (Requirement, bool)> {
        let reqs = *self;
        Requirement::ALL.into_iter().map(move |r| (r, reqs.is_met(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_password_meets_every_rule() {
        let reqs = PasswordRequirements::evaluate("Abcdef1!");
        assert!(reqs.lowercase);
        assert!(reqs.uppercase);
        assert!(reqs.symbol);
        assert!(reqs.length);
        assert!(reqs.is_satisfied());
    }

    #[test]
    fn lowercase_only_password_meets_length_only() {
        let reqs = PasswordRequirements::evaluate("abcdefgh");
        assert_eq!(
            reqs,
            PasswordRequirements {
                lowercase: true,
                uppercase: false,
                symbol: false,
                length: true,
            }
        );
        assert!(!reqs.is_satisfied());
    }

    #[test]
    fn each_missing_category_is_reported() {
        let cases = [
            ("ABCDEFG!", Requirement::Lowercase),
            ("abcdefg!", Requirement::Uppercase),
            ("Abcdefgh", Requirement::Symbol),
            ("Abc!", Requirement::Length),
        ];
        for (password, missing) in cases {
            let reqs = PasswordRequirements::evaluate(password);
            assert!(!reqs.is_met(missing), "{password} should miss {missing:?}");
            for other in Requirement::ALL.into_iter().filter(|r| *r != missing) {
                assert!(reqs.is_met(other), "{password} should meet {other:?}");
            }
            assert!(!reqs.is_satisfied());
        }
    }

    #[test]
    fn empty_password_meets_nothing() {
        let reqs = PasswordRequirements::evaluate("");
        assert!(reqs.checks().all(|(_, met)| !met));
    }

    #[test]
    fn every_listed_symbol_counts() {
        for symbol in SYMBOLS.chars() {
            assert!(PasswordRequirements::evaluate(&symbol.to_string()).symbol);
        }
        // Not in the class.
        assert!(!PasswordRequirements::evaluate("-_+=~`[]/\\';").symbol);
    }

    #[test]
    fn non_ascii_letters_do_not_count_as_case() {
        let reqs = PasswordRequirements::evaluate("ÉÀÜéàü!!");
        assert!(!reqs.lowercase);
        assert!(!reqs.uppercase);
        assert!(reqs.length);
    }

    #[test]
    fn checks_are_in_display_order() {
        let labels: Vec<_> = PasswordRequirements::default()
            .checks()
            .map(|(r, _)| r.label())
            .collect();
        assert_eq!(
            labels,
            [
                "Lowercase letter",
                "Uppercase letter",
                "Special symbol",
                "8+ characters"
            ]
        );
    }
}
