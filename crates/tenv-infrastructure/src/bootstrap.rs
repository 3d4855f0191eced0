//! Environment bootstrap
//!
//! Creates a test environment from configuration, resolving configured
//! wrapper names through the compile-time wrapper registry.

use crate::config::AppConfig;
use tenv_application::{TestEnvironment, resolve_wrapper};
use tenv_domain::error::Result;
use tracing::info;

/// Create an unbuilt environment named and wrapped per `config`
///
/// Fails on the first wrapper name that is not registered.
pub fn environment_from_config(config: &AppConfig) -> Result<TestEnvironment> {
    let environment = TestEnvironment::named(config.environment.name.as_str());
    for name in &config.environment.wrappers {
        environment.wrap_type(resolve_wrapper(name)?);
    }

    info!(
        environment = %config.environment.name,
        wrappers = config.environment.wrappers.len(),
        "Test environment bootstrapped from configuration"
    );
    Ok(environment)
}
