/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. A reactor evaluates its models once per time step and relies on this
/// to keep every step a pure function of the previous state.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Moles of product formed from a number of moles of feed.
    struct Yield(f64);

    impl Model for Yield {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(self.0 * input)
        }
    }

    #[test]
    fn same_input_same_output() {
        let model = Yield(0.25);

        let first = model.call(&8.0).unwrap();
        let second = model.call(&8.0).unwrap();

        assert_eq!(first, 2.0);
        assert_eq!(first, second);
    }
}
