use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Fraction of adsorption sites occupied, `θ = q / q_max`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveCapacity`] if `q_max` is not positive.
pub fn fractional_occupancy(q: f64, q_max: f64) -> Result<f64, DomainError> {
    check_capacity(q_max)?;
    Ok(q / q_max)
}

/// Henry's law loading, `q = q_max · b · p`.
///
/// This is the linear, low-pressure limit of the Langmuir isotherm and is
/// never below it for non-negative `b` and `p`.
#[must_use]
pub fn henry_loading(q_max: f64, b: f64, p: f64) -> f64 {
    q_max * (b * p)
}

/// Langmuir loading, `q = q_max · b · p / (1 + b · p)`.
///
/// For `b, p ≥ 0` the result lies in `[0, q_max]` and is non-decreasing in `p`.
/// It stays strictly below `q_max` until `b · p` grows to about `1e16`, where
/// `1 + b · p` rounds to `b · p` and the loading saturates at `q_max`.
/// An infinite `b · p` also gives `q_max`.
#[must_use]
pub fn langmuir_loading(q_max: f64, b: f64, p: f64) -> f64 {
    let bp = b * p;
    if bp.is_infinite() {
        return q_max;
    }
    // The fraction is at most 1, so this cannot overflow before `q_max` does.
    q_max * (bp / (1.0 + bp))
}

/// Slope of the Langmuir isotherm with respect to pressure.
///
/// `dq/dp = q_max · b / (1 + b · p)²`
#[must_use]
pub fn langmuir_slope(q_max: f64, b: f64, p: f64) -> f64 {
    let denominator = 1.0 + b * p;
    q_max * b / (denominator * denominator)
}

/// Temperature-dependent adsorption constant, `b = b0 · exp(−ΔE_ads / (R · T))`.
///
/// # Errors
///
/// Returns an error if `temperature` or `gas_constant` is not positive.
pub fn adsorption_constant(
    b0: f64,
    delta_e_ads: f64,
    gas_constant: f64,
    temperature: f64,
) -> Result<f64, DomainError> {
    if !is_positive(temperature) {
        return Err(DomainError::NonPositiveTemperature { temperature });
    }
    if !is_positive(gas_constant) {
        return Err(DomainError::NonPositiveGasConstant { gas_constant });
    }
    Ok(b0 * (-delta_e_ads / (gas_constant * temperature)).exp())
}

/// Adsorption constant from first-order adsorption and desorption rate constants.
///
/// # Errors
///
/// Returns [`DomainError::ZeroDesorptionRate`] if `k_des` is zero.
pub fn adsorption_constant_from_rates(k_ads: f64, k_des: f64) -> Result<f64, DomainError> {
    if k_des == 0.0 {
        return Err(DomainError::ZeroDesorptionRate);
    }
    Ok(k_ads / k_des)
}

/// Returns `true` for values strictly greater than zero, `false` for `NaN`.
pub(crate) fn is_positive(value: f64) -> bool {
    value > 0.0
}

fn check_capacity(q_max: f64) -> Result<(), DomainError> {
    if is_positive(q_max) {
        Ok(())
    } else {
        Err(DomainError::NonPositiveCapacity { q_max })
    }
}

/// Langmuir parameters of one adsorbate on one adsorbent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsothermParameters {
    /// Maximum adsorption capacity, in mol/kg.
    pub q_max: f64,

    /// Adsorption constant at the reference state, in 1/Pa.
    pub b0: f64,

    /// Adsorption energy, in J/mol.
    pub delta_e_ads: f64,
}

impl IsothermParameters {
    /// Creates validated isotherm parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `q_max ≤ 0` or `b0 < 0`.
    pub fn new(q_max: f64, b0: f64, delta_e_ads: f64) -> Result<Self, DomainError> {
        let params = Self {
            q_max,
            b0,
            delta_e_ads,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks `q_max > 0` and `b0 ≥ 0`.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_capacity(self.q_max)?;
        if self.b0 >= 0.0 {
            Ok(())
        } else {
            Err(DomainError::NegativeAdsorptionConstant { b0: self.b0 })
        }
    }

    /// Adsorption constant at `temperature`.
    ///
    /// # Errors
    ///
    /// See [`adsorption_constant`].
    pub fn adsorption_constant(
        &self,
        gas_constant: f64,
        temperature: f64,
    ) -> Result<f64, DomainError> {
        adsorption_constant(self.b0, self.delta_e_ads, gas_constant, temperature)
    }

    /// Equilibrium Langmuir loading at `temperature` and partial pressure `pressure`.
    ///
    /// # Errors
    ///
    /// See [`adsorption_constant`].
    pub fn langmuir_loading(
        &self,
        gas_constant: f64,
        temperature: f64,
        pressure: f64,
    ) -> Result<f64, DomainError> {
        let b = self.adsorption_constant(gas_constant, temperature)?;
        Ok(langmuir_loading(self.q_max, b, pressure))
    }

    /// Henry loading at `temperature` and partial pressure `pressure`.
    ///
    /// # Errors
    ///
    /// See [`adsorption_constant`].
    pub fn henry_loading(
        &self,
        gas_constant: f64,
        temperature: f64,
        pressure: f64,
    ) -> Result<f64, DomainError> {
        let b = self.adsorption_constant(gas_constant, temperature)?;
        Ok(henry_loading(self.q_max, b, pressure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const R: f64 = 8.314_462_618;

    #[test]
    fn occupancy_is_loading_over_capacity() {
        assert_relative_eq!(fractional_occupancy(1.5, 6.0).unwrap(), 0.25);
    }

    #[test]
    fn occupancy_rejects_non_positive_capacity() {
        assert_eq!(
            fractional_occupancy(1.0, 0.0),
            Err(DomainError::NonPositiveCapacity { q_max: 0.0 })
        );
        assert!(fractional_occupancy(1.0, -2.0).is_err());
        assert!(fractional_occupancy(1.0, f64::NAN).is_err());
    }

    #[test]
    fn langmuir_reaches_half_capacity_at_inverse_b() {
        let q_max = 4.0;
        let b = 2e-5;
        assert_relative_eq!(langmuir_loading(q_max, b, 1.0 / b), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn langmuir_saturates_at_capacity_for_extreme_pressure() {
        let q_max = 11.0;
        assert!(langmuir_loading(q_max, 1e-3, 1e10) < q_max);
        assert_eq!(langmuir_loading(q_max, 1.0, 1e17), q_max);
        assert_eq!(langmuir_loading(q_max, 1e300, 1e300), q_max);
        assert_eq!(langmuir_loading(q_max, 1.0, f64::INFINITY), q_max);
        assert!(langmuir_loading(1e300, 1e200, 1e200).is_finite());
    }

    #[test]
    fn langmuir_approaches_henry_at_low_pressure() {
        let q_max = 10.0;
        let b = 1e-6;
        let p = 1.0;
        assert_relative_eq!(
            langmuir_loading(q_max, b, p),
            henry_loading(q_max, b, p),
            max_relative = 1e-5
        );
    }

    #[test]
    fn slope_matches_finite_difference() {
        let (q_max, b, p) = (5.0, 3e-6, 2e5);
        let h = 1.0;
        let numeric =
            (langmuir_loading(q_max, b, p + h) - langmuir_loading(q_max, b, p - h)) / (2.0 * h);
        assert_relative_eq!(langmuir_slope(q_max, b, p), numeric, max_relative = 1e-6);
    }

    #[test]
    fn constant_follows_arrhenius_form() {
        let b = adsorption_constant(1e-5, -20_000.0, R, 500.0).unwrap();
        assert_relative_eq!(b, 1e-5 * (20_000.0 / (R * 500.0)).exp());
    }

    #[test]
    fn constant_rejects_non_positive_temperature_and_gas_constant() {
        assert_eq!(
            adsorption_constant(1.0, 1.0, R, 0.0),
            Err(DomainError::NonPositiveTemperature { temperature: 0.0 })
        );
        assert_eq!(
            adsorption_constant(1.0, 1.0, -R, 300.0),
            Err(DomainError::NonPositiveGasConstant { gas_constant: -R })
        );
    }

    #[test]
    fn constant_from_rates() {
        assert_relative_eq!(adsorption_constant_from_rates(3.0, 4.0).unwrap(), 0.75);
        assert_eq!(
            adsorption_constant_from_rates(3.0, 0.0),
            Err(DomainError::ZeroDesorptionRate)
        );
    }

    #[test]
    fn parameters_validate_on_construction() {
        assert!(IsothermParameters::new(5.0, 0.0, -1.0).is_ok());
        assert_eq!(
            IsothermParameters::new(0.0, 1.0, 0.0),
            Err(DomainError::NonPositiveCapacity { q_max: 0.0 })
        );
        assert_eq!(
            IsothermParameters::new(1.0, -1.0, 0.0),
            Err(DomainError::NegativeAdsorptionConstant { b0: -1.0 })
        );
    }

    #[test]
    fn parameters_evaluate_loading_at_condition() {
        let params = IsothermParameters::new(8.0, 2e-9, -40_000.0).unwrap();
        let t = 523.15;
        let p = 1.5e7;

        let b = adsorption_constant(2e-9, -40_000.0, R, t).unwrap();
        let q = params.langmuir_loading(R, t, p).unwrap();

        assert_relative_eq!(q, langmuir_loading(8.0, b, p));
        assert!(q < params.q_max);
        assert!(params.henry_loading(R, t, p).unwrap() >= q);
    }
}
