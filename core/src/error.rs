use thiserror::Error;

pub mod solver {
    use thiserror::Error;

    /// Result type specialized for secret reconstruction.
    pub type Result<T, E = Error> = core::result::Result<T, E>;

    /// Errors raised while reconstructing a secret from shares.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("insufficient points: need {required}, got {provided}")]
        InsufficientPoints { required: usize, provided: usize },
        #[error(transparent)]
        Arithmetic(#[from] math::error::RationalError),
    }
}

pub mod input {
    use thiserror::Error;

    /// Result type specialized for test-case ingestion.
    pub type Result<T, E = Error> = core::result::Result<T, E>;

    /// Errors raised while locating and decoding shares in a document.
    #[derive(Debug, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("failed to read {path}: {source}")]
        Io {
            path: String,
            #[source]
            source: std::io::Error,
        },
        #[error("malformed test case: {0}")]
        Malformed(String),
        #[error("missing required field `{0}`")]
        MissingField(&'static str),
        #[error("invalid threshold {0}: must be at least 1")]
        InvalidThreshold(usize),
        #[error(
            "unsupported base {0}: expected a base in [{min}, {max}]",
            min = math::radix::MIN_BASE,
            max = math::radix::MAX_BASE
        )]
        UnsupportedBase(u64),
        #[error(transparent)]
        Decode(#[from] math::error::RadixError),
    }
}

pub use input::Error as InputError;
pub use solver::Error as SolverError;

/// Common result type for recovery operations.
pub type Result<T, E = RecoverError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecoverError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}
