//! Password policy command handler.

use anyhow::Result;
use datxb_core::AuthError;
use datxb_core::policy::PasswordRequirements;

/// Prints the signup checklist for `password`.
///
/// # Errors
/// Fails with the policy error when any requirement is unmet.
pub fn check(password: &str) -> Result<()> {
    let requirements = PasswordRequirements::evaluate(password);
    for (requirement, met) in requirements.checks() {
        let mark = if met { "✓" } else { "✗" };
        println!("{mark} {}", requirement.label());
    }

    if !requirements.is_satisfied() {
        return Err(AuthError::PasswordPolicy.into());
    }
    println!("Password meets all requirements");
    Ok(())
}
