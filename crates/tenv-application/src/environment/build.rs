//! Build engine
//!
//! Runs the frozen pipeline once. Each block is constructed from the data
//! published so far (caller data first, then every earlier block and its
//! published values), set up, executed and then published itself.

use super::registration::Registration;
use super::{RealizedBlock, TestEnvironment};
use crate::dependencies::Dependencies;
use std::sync::Arc;
use tenv_domain::{ActionAfterExecution, Error, Instance, Result};
use tracing::{debug, info, warn};

impl TestEnvironment {
    /// Freeze the registry and run every block in order
    ///
    /// `data` is visible to every block as a constructor dependency. The
    /// environment counts as built even when a block fails; a second call
    /// fails with [`Error::AlreadyBuilt`].
    pub async fn build(&self, data: Vec<Instance>) -> Result<&Self> {
        let registrations = {
            let mut state = self.inner.state.lock();
            if state.built {
                return Err(Error::AlreadyBuilt);
            }
            state.built = true;
            state.registrations.clone()
        };

        info!(
            environment = %self.name(),
            blocks = registrations.len(),
            "Building test environment"
        );

        let mut published = data;
        let outcome = self.run_pipeline(&registrations, &mut published).await;
        self.track_disposables(&published);

        match outcome {
            Ok(executed) => {
                info!(
                    environment = %self.name(),
                    executed,
                    disposables = self.disposable_count(),
                    "Test environment built"
                );
                Ok(self)
            }
            Err(e) => {
                warn!(environment = %self.name(), error = %e, "Test environment build failed");
                Err(e)
            }
        }
    }

    async fn run_pipeline(
        &self,
        registrations: &[Arc<dyn Registration>],
        published: &mut Vec<Instance>,
    ) -> Result<usize> {
        let resolver = self.resolver();
        let mut executed = 0;

        for registration in registrations {
            let key = registration.key();
            let realized = {
                let deps =
                    Dependencies::new(key.block_type().name(), published.as_slice(), &resolver);
                registration.realize(&deps, self)?
            };

            debug!(block = %key, "Executing block");
            let (action, data) = realized.block.execute(self).await?.into_parts();

            published.push(realized.instance);
            published.extend(data);
            self.inner.blocks.lock().push(RealizedBlock {
                key: key.clone(),
                block: realized.block,
            });
            executed += 1;

            if action == ActionAfterExecution::Break {
                debug!(block = %key, "Block requested break");
                break;
            }
        }

        Ok(executed)
    }

    fn track_disposables(&self, published: &[Instance]) {
        for disposer in published.iter().filter_map(Instance::disposer) {
            self.add_disposable(Arc::clone(disposer));
        }
    }
}
