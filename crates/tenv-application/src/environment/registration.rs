//! Typed registrations
//!
//! A registration remembers a block type, its mark and an optional setup
//! callback. The concrete block type is erased behind [`Registration`] so
//! the pipeline can hold heterogeneous blocks; `update` downcasts back to
//! [`TypedRegistration`] to chain setups.

use super::TestEnvironment;
use crate::dependencies::Dependencies;
use crate::ports::{Block, Construct};
use downcast_rs::{DowncastSync, impl_downcast};
use std::sync::Arc;
use tenv_domain::{Instance, RegistrationKey, Result};

/// Setup callback run on a freshly constructed block before it executes
pub type Setup<B> = Arc<dyn Fn(&mut B, &TestEnvironment) -> Result<()> + Send + Sync>;

/// Block constructed by a registration, plus its published instance
pub(crate) struct Realized {
    pub(crate) block: Arc<dyn Block>,
    pub(crate) instance: Instance,
}

pub(crate) trait Registration: DowncastSync {
    fn key(&self) -> &RegistrationKey;

    fn realize(&self, deps: &Dependencies<'_>, env: &TestEnvironment) -> Result<Realized>;
}

impl_downcast!(sync Registration);

pub(crate) struct TypedRegistration<B> {
    key: RegistrationKey,
    setup: Option<Setup<B>>,
}

impl<B: Block + Construct> TypedRegistration<B> {
    pub(crate) fn new(mark: Option<&str>, setup: Option<Setup<B>>) -> Self {
        Self {
            key: RegistrationKey::of::<B>(mark),
            setup,
        }
    }

    /// Same key, with `update` running after the existing setup
    pub(crate) fn chained(&self, update: Setup<B>) -> Self {
        let setup: Setup<B> = match &self.setup {
            Some(previous) => {
                let previous = Arc::clone(previous);
                Arc::new(move |block: &mut B, env: &TestEnvironment| {
                    previous(block, env)?;
                    update(block, env)
                })
            }
            None => update,
        };
        Self {
            key: self.key.clone(),
            setup: Some(setup),
        }
    }
}

impl<B: Block + Construct> Registration for TypedRegistration<B> {
    fn key(&self) -> &RegistrationKey {
        &self.key
    }

    fn realize(&self, deps: &Dependencies<'_>, env: &TestEnvironment) -> Result<Realized> {
        let mut block = B::construct(deps)?;
        if let Some(setup) = &self.setup {
            setup(&mut block, env)?;
        }

        let block = Arc::new(block);
        let mut instance = Instance::new(Arc::clone(&block));
        if let Some(disposer) = Arc::clone(&block).as_disposable() {
            instance = instance.with_disposer(disposer);
        }

        Ok(Realized { block, instance })
    }
}
