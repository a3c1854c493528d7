use thiserror::Error;

/// Physical input outside the domain of an isotherm or bed relation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("maximum capacity must be positive, got {q_max} mol/kg")]
    NonPositiveCapacity { q_max: f64 },

    #[error("reference adsorption constant must be non-negative, got {b0} 1/Pa")]
    NegativeAdsorptionConstant { b0: f64 },

    #[error("temperature must be positive, got {temperature} K")]
    NonPositiveTemperature { temperature: f64 },

    #[error("pressure must be non-negative, got {pressure} Pa")]
    NegativePressure { pressure: f64 },

    #[error("gas constant must be positive, got {gas_constant} J/(mol·K)")]
    NonPositiveGasConstant { gas_constant: f64 },

    #[error("desorption rate constant must not be zero")]
    ZeroDesorptionRate,

    #[error("bed volume must be positive, got {volume} m³")]
    NonPositiveBedVolume { volume: f64 },

    #[error("cross-sectional area must be positive, got {area} m²")]
    NonPositiveArea { area: f64 },

    #[error("denominator of `{quantity}` is zero")]
    ZeroDenominator { quantity: &'static str },

    #[error("reference `{quantity}` must be positive, got {value}")]
    NonPositiveReference { quantity: &'static str, value: f64 },
}
