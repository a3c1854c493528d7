use ndarray::{Array1, Array2};

use crate::{DomainError, IsothermParameters, langmuir_loading};

/// Evaluates Langmuir loading on a temperature × pressure grid.
///
/// Row `i` holds loadings at `temperatures[i]`, column `j` at `pressures[j]`.
/// The adsorption constant is computed once per temperature.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use zeolite_isotherm::{IsothermParameters, loading_grid};
///
/// let params = IsothermParameters::new(5.0, 1e-6, 0.0).unwrap();
/// let grid = loading_grid(&params, 8.314, &array![300.0, 400.0], &array![0.0, 1e5, 1e6]).unwrap();
///
/// assert_eq!(grid.dim(), (2, 3));
/// assert_eq!(grid[[0, 0]], 0.0);
/// ```
///
/// # Errors
///
/// Returns an error if any temperature or the gas constant is not positive.
pub fn loading_grid(
    params: &IsothermParameters,
    gas_constant: f64,
    temperatures: &Array1<f64>,
    pressures: &Array1<f64>,
) -> Result<Array2<f64>, DomainError> {
    let constants = temperatures
        .iter()
        .map(|&t| params.adsorption_constant(gas_constant, t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Array2::from_shape_fn(
        (temperatures.len(), pressures.len()),
        |(i, j)| langmuir_loading(params.q_max, constants[i], pressures[j]),
    ))
}
