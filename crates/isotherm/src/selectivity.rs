use crate::{DomainError, isotherm::is_positive};

/// Equilibrium selectivity of species A over B, `α = b_A / b_B`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveReference`] if `b_b` is not positive.
pub fn equilibrium_selectivity(b_a: f64, b_b: f64) -> Result<f64, DomainError> {
    check_reference("b_b", b_b)?;
    Ok(b_a / b_b)
}

/// Kinetic selectivity of species A over B.
///
/// Combines equilibrium selectivity with the ratio of intracrystalline
/// diffusivities, `α = (b_A / b_B) · sqrt(D_A / D_B)`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveReference`] if `b_b` or `d_b` is not positive.
pub fn kinetic_selectivity(b_a: f64, b_b: f64, d_a: f64, d_b: f64) -> Result<f64, DomainError> {
    check_reference("d_b", d_b)?;
    Ok(equilibrium_selectivity(b_a, b_b)? * (d_a / d_b).sqrt())
}

fn check_reference(quantity: &'static str, value: f64) -> Result<(), DomainError> {
    if is_positive(value) {
        Ok(())
    } else {
        Err(DomainError::NonPositiveReference { quantity, value })
    }
}
