//! Pipeline registry operations
//!
//! Every mutation takes the registry lock, fails with
//! [`Error::AlreadyBuilt`] once the environment was built and leaves the
//! pipeline untouched on any error.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `add*` | Append a block |
//! | `insert_at*` | Insert at an explicit index |
//! | `insert*` | Insert before/after an existing registration |
//! | `update` | Chain a setup onto an existing registration |
//! | `replace` | Drop a registration and append its successor |
//! | `remove` / `remove_all` | Drop registrations |

use super::TestEnvironment;
use super::registration::{Registration, Setup, TypedRegistration};
use crate::ports::{Block, Construct};
use std::sync::Arc;
use tenv_domain::{Error, InsertMode, RegistrationKey, Result};
use tracing::debug;

type Pipeline = Vec<Arc<dyn Registration>>;

fn position(pipeline: &Pipeline, key: &RegistrationKey) -> Option<usize> {
    pipeline.iter().position(|r| r.key() == key)
}

fn ensure_unique(pipeline: &Pipeline, key: &RegistrationKey) -> Result<()> {
    match position(pipeline, key) {
        Some(_) => Err(Error::duplicate(key)),
        None => Ok(()),
    }
}

fn setup_of<B, F>(setup: F) -> Setup<B>
where
    F: Fn(&mut B, &TestEnvironment) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(setup)
}

impl TestEnvironment {
    fn mutate<R>(&self, op: impl FnOnce(&mut Pipeline) -> Result<R>) -> Result<R> {
        let mut state = self.inner.state.lock();
        if state.built {
            return Err(Error::AlreadyBuilt);
        }
        op(&mut state.registrations)
    }

    fn push_at<B: Block + Construct>(
        &self,
        index: Option<usize>,
        mark: Option<&str>,
        setup: Option<Setup<B>>,
    ) -> Result<&Self> {
        let registration = TypedRegistration::<B>::new(mark, setup);
        self.mutate(|pipeline| {
            ensure_unique(pipeline, registration.key())?;
            let index = index.unwrap_or(pipeline.len());
            if index > pipeline.len() {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: pipeline.len(),
                });
            }
            debug!(block = %registration.key(), index, "Registering block");
            pipeline.insert(index, Arc::new(registration));
            Ok(())
        })?;
        Ok(self)
    }

    /// Append block `B` without a mark
    pub fn add<B: Block + Construct>(&self) -> Result<&Self> {
        self.push_at::<B>(None, None, None)
    }

    /// Append block `B` under `mark`
    pub fn add_marked<B: Block + Construct>(&self, mark: &str) -> Result<&Self> {
        self.push_at::<B>(None, Some(mark), None)
    }

    /// Append block `B` with a setup run before it executes
    pub fn add_with<B, F>(&self, mark: Option<&str>, setup: F) -> Result<&Self>
    where
        B: Block + Construct,
        F: Fn(&mut B, &TestEnvironment) -> Result<()> + Send + Sync + 'static,
    {
        self.push_at::<B>(None, mark, Some(setup_of(setup)))
    }

    /// Insert block `B` at `index`
    ///
    /// `index` may equal the pipeline length, which appends.
    pub fn insert_at<B: Block + Construct>(&self, index: usize, mark: Option<&str>) -> Result<&Self> {
        self.push_at::<B>(Some(index), mark, None)
    }

    /// Insert block `B` at `index` with a setup
    pub fn insert_at_with<B, F>(&self, index: usize, mark: Option<&str>, setup: F) -> Result<&Self>
    where
        B: Block + Construct,
        F: Fn(&mut B, &TestEnvironment) -> Result<()> + Send + Sync + 'static,
    {
        self.push_at::<B>(Some(index), mark, Some(setup_of(setup)))
    }

    fn insert_relative<Find: Block, B: Block + Construct>(
        &self,
        mode: InsertMode,
        find_mark: Option<&str>,
        insert_mark: Option<&str>,
        setup: Option<Setup<B>>,
    ) -> Result<&Self> {
        let anchor = RegistrationKey::of::<Find>(find_mark);
        let registration = TypedRegistration::<B>::new(insert_mark, setup);
        self.mutate(|pipeline| {
            let found = position(pipeline, &anchor).ok_or_else(|| Error::not_found(&anchor))?;
            ensure_unique(pipeline, registration.key())?;
            let index = match mode {
                InsertMode::After => found + 1,
                InsertMode::Before => found,
            };
            debug!(block = %registration.key(), anchor = %anchor, ?mode, "Inserting block");
            pipeline.insert(index, Arc::new(registration));
            Ok(())
        })?;
        Ok(self)
    }

    /// Insert block `B` next to the registration of `Find` under `find_mark`
    pub fn insert<Find: Block, B: Block + Construct>(
        &self,
        mode: InsertMode,
        find_mark: Option<&str>,
        insert_mark: Option<&str>,
    ) -> Result<&Self> {
        self.insert_relative::<Find, B>(mode, find_mark, insert_mark, None)
    }

    /// Insert block `B` next to `Find` with a setup
    pub fn insert_with<Find, B, F>(
        &self,
        mode: InsertMode,
        find_mark: Option<&str>,
        insert_mark: Option<&str>,
        setup: F,
    ) -> Result<&Self>
    where
        Find: Block,
        B: Block + Construct,
        F: Fn(&mut B, &TestEnvironment) -> Result<()> + Send + Sync + 'static,
    {
        self.insert_relative::<Find, B>(mode, find_mark, insert_mark, Some(setup_of(setup)))
    }

    /// Chain `update` after the existing setup of `B` under `mark`
    ///
    /// The registration keeps its position.
    pub fn update<B, F>(&self, mark: Option<&str>, update: F) -> Result<&Self>
    where
        B: Block + Construct,
        F: Fn(&mut B, &TestEnvironment) -> Result<()> + Send + Sync + 'static,
    {
        let key = RegistrationKey::of::<B>(mark);
        self.mutate(|pipeline| {
            let index = position(pipeline, &key).ok_or_else(|| Error::not_found(&key))?;
            let typed = pipeline[index]
                .downcast_ref::<TypedRegistration<B>>()
                .ok_or_else(|| {
                    Error::block_definition(
                        key.block_type().name(),
                        "registration does not hold this block type",
                    )
                })?;
            let chained = typed.chained(setup_of(update));
            debug!(block = %key, index, "Updating block setup");
            pipeline[index] = Arc::new(chained);
            Ok(())
        })?;
        Ok(self)
    }

    /// Remove the registration of `B` under `find_mark` and append a new one
    ///
    /// The new registration takes `add_mark` and `setup`, runs after every
    /// other block and does not inherit the old setup. Fails without changes
    /// when the new key already exists elsewhere in the pipeline.
    pub fn replace<B, F>(&self, find_mark: Option<&str>, add_mark: Option<&str>, setup: F) -> Result<&Self>
    where
        B: Block + Construct,
        F: Fn(&mut B, &TestEnvironment) -> Result<()> + Send + Sync + 'static,
    {
        let old = RegistrationKey::of::<B>(find_mark);
        let registration = TypedRegistration::<B>::new(add_mark, Some(setup_of(setup)));
        self.mutate(|pipeline| {
            let index = position(pipeline, &old).ok_or_else(|| Error::not_found(&old))?;
            if let Some(existing) = position(pipeline, registration.key())
                && existing != index
            {
                return Err(Error::duplicate(registration.key()));
            }
            debug!(block = %old, replacement = %registration.key(), "Replacing block");
            pipeline.remove(index);
            pipeline.push(Arc::new(registration));
            Ok(())
        })?;
        Ok(self)
    }

    /// Remove the registration of `B` under `mark`
    pub fn remove<B: Block>(&self, mark: Option<&str>) -> Result<&Self> {
        let key = RegistrationKey::of::<B>(mark);
        self.mutate(|pipeline| {
            let index = position(pipeline, &key).ok_or_else(|| Error::not_found(&key))?;
            debug!(block = %key, index, "Removing block");
            pipeline.remove(index);
            Ok(())
        })?;
        Ok(self)
    }

    /// Remove every registration of `B`, whatever its mark
    pub fn remove_all<B: Block>(&self) -> Result<&Self> {
        self.mutate(|pipeline| {
            pipeline.retain(|r| !r.key().is::<B>());
            Ok(())
        })?;
        Ok(self)
    }

    /// Index of the registration of `B` under `mark`
    pub fn index_of<B: Block>(&self, mark: Option<&str>) -> Option<usize> {
        position(
            &self.inner.state.lock().registrations,
            &RegistrationKey::of::<B>(mark),
        )
    }

    /// Registration keys, in pipeline order
    pub fn registrations(&self) -> Vec<RegistrationKey> {
        self.inner
            .state
            .lock()
            .registrations
            .iter()
            .map(|r| r.key().clone())
            .collect()
    }
}
