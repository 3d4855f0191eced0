//! Environment teardown
//!
//! Runs every realized block's end-of-life hook, disposes every tracked
//! disposable (both in reverse realization order) and finally the resolver.
//! Failures do not stop teardown; they are collected into
//! [`Error::DisposeAggregate`]. Teardown drains what it released, so a
//! second call is a no-op.

use super::TestEnvironment;
use tenv_domain::{Error, Result};
use tracing::{error, info};

impl TestEnvironment {
    /// Release everything the environment created
    pub async fn dispose(&self) -> Result<()> {
        let blocks = std::mem::take(&mut *self.inner.blocks.lock());
        let disposables = std::mem::take(&mut *self.inner.disposables.lock());
        let resolver = self.inner.resolver.write().take();

        info!(
            environment = %self.name(),
            blocks = blocks.len(),
            disposables = disposables.len(),
            "Disposing test environment"
        );

        let mut errors = Vec::new();

        for realized in blocks.iter().rev() {
            if let Err(e) = realized.block().execute_at_the_end(self).await {
                error!(block = %realized.key(), error = %e, "End-of-life hook failed");
                errors.push(e);
            }
        }

        for disposable in disposables.iter().rev() {
            if let Err(e) = disposable.dispose().await {
                error!(error = %e, "Failed to dispose tracked resource");
                errors.push(e);
            }
        }

        if let Some(resolver) = resolver
            && let Err(e) = resolver.dispose().await
        {
            error!(error = %e, "Failed to dispose resolver");
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::DisposeAggregate { errors })
        }
    }
}
