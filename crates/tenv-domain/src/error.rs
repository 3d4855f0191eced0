//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test environment engine
///
/// Every failure class a test author may want to assert on has its own
/// variant; nothing is retried internally.
#[derive(Error, Debug)]
pub enum Error {
    /// A block with the same type and mark is already registered
    #[error("Block already exists: {registration}")]
    DuplicateRegistration {
        /// Display form of the conflicting registration
        registration: String,
    },

    /// No registration matches the requested type and mark
    #[error("Unable to find: {registration}")]
    RegistrationNotFound {
        /// Display form of the registration that was looked up
        registration: String,
    },

    /// Explicit insertion index lies outside the pipeline
    #[error("Index {index} is out of range for a pipeline of {len} block(s)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Pipeline length at the time of the call
        len: usize,
    },

    /// The environment was built already and can not be modified or rebuilt
    #[error("The test environment is already built and can not be modified")]
    AlreadyBuilt,

    /// A test was requested before the environment was built
    #[error("Before calling create_test, build must be called first")]
    NotBuilt,

    /// A required constructor parameter could not be resolved
    #[error("Unable to resolve {target}: parameter `{parameter}` of type {parameter_type}")]
    Resolution {
        /// Type being constructed (block, test or wrapper)
        target: String,
        /// Name of the offending parameter
        parameter: String,
        /// Type name of the offending parameter
        parameter_type: String,
    },

    /// A setup callback does not match the concrete type of its block
    #[error(
        "Specified block: {block_type} can not be set up ({message}). \
         Blocks must be publicly constructible types"
    )]
    BlockDefinition {
        /// Registered block type
        block_type: String,
        /// What went wrong
        message: String,
    },

    /// One or more wrapper finish calls failed
    #[error("Error(s) during finishing test wrappers: {}", join_errors(.errors))]
    WrapperAggregate {
        /// Every captured failure, in finish order
        errors: Vec<Error>,
    },

    /// One or more teardown steps failed while disposing an environment
    #[error("Error(s) during disposing the test environment: {}", join_errors(.errors))]
    DisposeAggregate {
        /// Every captured failure, in teardown order
        errors: Vec<Error>,
    },

    /// A block, wrapper or disposable reported a failure
    #[error("Execution error: {message}")]
    Execution {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

fn join_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// Registry error creation methods
impl Error {
    /// Create a duplicate registration error
    pub fn duplicate<S: ToString>(registration: S) -> Self {
        Self::DuplicateRegistration {
            registration: registration.to_string(),
        }
    }

    /// Create a registration not found error
    pub fn not_found<S: ToString>(registration: S) -> Self {
        Self::RegistrationNotFound {
            registration: registration.to_string(),
        }
    }

    /// Create a resolution error for `target`'s parameter
    pub fn resolution<T: Into<String>, P: Into<String>, Q: Into<String>>(
        target: T,
        parameter: P,
        parameter_type: Q,
    ) -> Self {
        Self::Resolution {
            target: target.into(),
            parameter: parameter.into(),
            parameter_type: parameter_type.into(),
        }
    }

    /// Create a block definition error
    pub fn block_definition<T: Into<String>, S: Into<String>>(block_type: T, message: S) -> Self {
        Self::BlockDefinition {
            block_type: block_type.into(),
            message: message.into(),
        }
    }
}

// Plugin error creation methods
impl Error {
    /// Create an execution error
    pub fn execution<S: Into<String>>(message: S) -> Self {
        Self::Execution {
            message: message.into(),
            source: None,
        }
    }

    /// Create an execution error with source
    pub fn execution_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Execution {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Inner failures of an aggregate error, empty for every other variant
    pub fn inner_errors(&self) -> &[Error] {
        match self {
            Self::WrapperAggregate { errors } | Self::DisposeAggregate { errors } => errors,
            _ => &[],
        }
    }
}
