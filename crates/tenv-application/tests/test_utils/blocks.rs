//! Fixture blocks

use super::Journal;
use async_trait::async_trait;
use std::sync::Arc;
use tenv_application::{Block, Construct, Dependencies, TestEnvironment};
use tenv_domain::{BlockExecutionResult, Dispose, Error, Instance, Result};

macro_rules! journal_block {
    ($name:ident, $label:literal) => {
        pub struct $name {
            journal: Arc<Journal>,
            pub tags: Vec<String>,
        }

        impl Construct for $name {
            fn construct(deps: &Dependencies<'_>) -> Result<Self> {
                Ok(Self {
                    journal: deps.required::<Journal>("journal")?,
                    tags: Vec::new(),
                })
            }
        }

        #[async_trait]
        impl Block for $name {
            async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
                if self.tags.is_empty() {
                    self.journal.record($label);
                } else {
                    self.journal
                        .record(format!("{}[{}]", $label, self.tags.join(",")));
                }
                Ok(BlockExecutionResult::empty_continue())
            }
        }
    };
}

journal_block!(BlockA, "A");
journal_block!(BlockB, "B");
journal_block!(BlockC, "C");

/// Records itself and stops the pipeline
pub struct Stop {
    journal: Arc<Journal>,
}

impl Construct for Stop {
    fn construct(deps: &Dependencies<'_>) -> Result<Self> {
        Ok(Self {
            journal: deps.required::<Journal>("journal")?,
        })
    }
}

#[async_trait]
impl Block for Stop {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        self.journal.record("Stop");
        Ok(BlockExecutionResult::empty_break())
    }
}

/// Value published by [`Publisher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(pub u32);

/// Publishes a [`Seed`]
pub struct Publisher;

impl Construct for Publisher {
    fn construct(_deps: &Dependencies<'_>) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait]
impl Block for Publisher {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        Ok(BlockExecutionResult::new_continue(vec![Instance::from_value(
            Seed(42),
        )]))
    }
}

/// Requires a [`Seed`] and the [`Publisher`] block itself
pub struct Consumer {
    journal: Arc<Journal>,
    seed: Arc<Seed>,
    publisher: Option<Arc<Publisher>>,
}

impl Construct for Consumer {
    fn construct(deps: &Dependencies<'_>) -> Result<Self> {
        Ok(Self {
            journal: deps.required::<Journal>("journal")?,
            seed: deps.required::<Seed>("seed")?,
            publisher: deps.optional::<Publisher>(),
        })
    }
}

#[async_trait]
impl Block for Consumer {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        self.journal.record(format!(
            "seed={} publisher={}",
            self.seed.0,
            self.publisher.is_some()
        ));
        Ok(BlockExecutionResult::empty_continue())
    }
}

/// Never registered anywhere
pub struct Missing;

/// Requires [`Missing`], so construction always fails
pub struct NeedsMissing;

impl Construct for NeedsMissing {
    fn construct(deps: &Dependencies<'_>) -> Result<Self> {
        deps.required::<Missing>("missing")?;
        Ok(Self)
    }
}

#[async_trait]
impl Block for NeedsMissing {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        Ok(BlockExecutionResult::empty_continue())
    }
}

/// Fails on execution
pub struct Failing;

impl Construct for Failing {
    fn construct(_deps: &Dependencies<'_>) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait]
impl Block for Failing {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        Err(Error::execution("block failed"))
    }
}

/// Block that is itself disposable and has an end-of-life hook
pub struct Owned {
    journal: Arc<Journal>,
}

impl Construct for Owned {
    fn construct(deps: &Dependencies<'_>) -> Result<Self> {
        Ok(Self {
            journal: deps.required::<Journal>("journal")?,
        })
    }
}

#[async_trait]
impl Block for Owned {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        Ok(BlockExecutionResult::empty_continue())
    }

    async fn execute_at_the_end(&self, _env: &TestEnvironment) -> Result<()> {
        self.journal.record("end:Owned");
        Ok(())
    }

    fn as_disposable(self: Arc<Self>) -> Option<Arc<dyn Dispose>> {
        Some(self)
    }
}

#[async_trait]
impl Dispose for Owned {
    async fn dispose(&self) -> Result<()> {
        self.journal.record("dispose:Owned");
        Ok(())
    }
}

/// Disposable value published by [`ResourcePublisher`]
pub struct Resource {
    journal: Arc<Journal>,
}

#[async_trait]
impl Dispose for Resource {
    async fn dispose(&self) -> Result<()> {
        self.journal.record("dispose:Resource");
        Ok(())
    }
}

/// Publishes a disposable [`Resource`] twice under the same object
pub struct ResourcePublisher {
    journal: Arc<Journal>,
}

impl Construct for ResourcePublisher {
    fn construct(deps: &Dependencies<'_>) -> Result<Self> {
        Ok(Self {
            journal: deps.required::<Journal>("journal")?,
        })
    }
}

#[async_trait]
impl Block for ResourcePublisher {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        let resource = Arc::new(Resource {
            journal: Arc::clone(&self.journal),
        });
        Ok(BlockExecutionResult::new_continue(vec![
            Instance::disposable(Arc::clone(&resource)),
            Instance::disposable(resource),
        ]))
    }
}

/// End-of-life hook that fails
pub struct FailingEnd;

impl Construct for FailingEnd {
    fn construct(_deps: &Dependencies<'_>) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait]
impl Block for FailingEnd {
    async fn execute(&self, _env: &TestEnvironment) -> Result<BlockExecutionResult> {
        Ok(BlockExecutionResult::empty_continue())
    }

    async fn execute_at_the_end(&self, _env: &TestEnvironment) -> Result<()> {
        Err(Error::execution("end hook failed"))
    }
}
