use crate::{DomainError, isotherm::is_positive};

/// Bed porosity from total and pore volume, `ε = 1 − v_pore / v_bed`.
///
/// The result is negative when `v_pore > v_bed`; checking that the pair is
/// physically consistent is left to the caller.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveBedVolume`] if `v_bed` is not positive.
pub fn bed_porosity(v_bed: f64, v_pore: f64) -> Result<f64, DomainError> {
    if !is_positive(v_bed) {
        return Err(DomainError::NonPositiveBedVolume { volume: v_bed });
    }
    Ok(1.0 - v_pore / v_bed)
}

/// Superficial velocity of the carrier gas, `u = Q / A`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveArea`] if `area` is not positive.
pub fn superficial_velocity(volume_rate: f64, area: f64) -> Result<f64, DomainError> {
    if !is_positive(area) {
        return Err(DomainError::NonPositiveArea { area });
    }
    Ok(volume_rate / area)
}

/// Propagation (shock wave) velocity of an adsorption front through the bed.
///
/// `v = u / ((1 − ε) · ρ_particle · dq/dc)`
///
/// # Errors
///
/// Returns [`DomainError::ZeroDenominator`] if `(1 − ε) · ρ_particle · dq/dc` is zero.
pub fn propagation_velocity(
    u: f64,
    porosity: f64,
    particle_density: f64,
    dq_dc: f64,
) -> Result<f64, DomainError> {
    let denominator = (1.0 - porosity) * particle_density * dq_dc;
    if denominator == 0.0 {
        return Err(DomainError::ZeroDenominator {
            quantity: "propagation velocity",
        });
    }
    Ok(u / denominator)
}

/// Time for the adsorption front to saturate a bed of length `length`.
///
/// `t_sat = (L / u) · (1 / (1 − ε)) · (ρ_particle / q*) · c_feed`
#[must_use]
pub fn saturation_time(
    length: f64,
    u: f64,
    porosity: f64,
    particle_density: f64,
    q_star: f64,
    c_feed: f64,
) -> f64 {
    (length / u) * (1.0 / (1.0 - porosity)) * (particle_density / q_star) * c_feed
}
