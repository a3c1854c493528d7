use crate::ReactorError;

/// Errors that stop a driven run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reactor failed at step {step}")]
    Reactor {
        step: u64,
        #[source]
        source: ReactorError,
    },
}
