use super::Instance;

/// Action to perform after a block executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionAfterExecution {
    /// Continue with the next registration
    #[default]
    Continue,
    /// Stop the pipeline; later registrations never execute
    Break,
}

/// Outcome of a block's `execute`
///
/// Published data becomes available to every later block as a constructor
/// dependency.
#[derive(Debug, Clone, Default)]
pub struct BlockExecutionResult {
    action: ActionAfterExecution,
    published: Vec<Instance>,
}

impl BlockExecutionResult {
    /// Result with an explicit action and published data
    pub fn new(action: ActionAfterExecution, published: Vec<Instance>) -> Self {
        Self { action, published }
    }

    /// Continue without publishing anything
    pub fn empty_continue() -> Self {
        Self::new(ActionAfterExecution::Continue, Vec::new())
    }

    /// Break without publishing anything
    pub fn empty_break() -> Self {
        Self::new(ActionAfterExecution::Break, Vec::new())
    }

    /// Continue and publish `data`
    pub fn new_continue(data: Vec<Instance>) -> Self {
        Self::new(ActionAfterExecution::Continue, data)
    }

    /// Break and publish `data`
    pub fn new_break(data: Vec<Instance>) -> Self {
        Self::new(ActionAfterExecution::Break, data)
    }

    /// Publish one more value
    #[must_use]
    pub fn publish(mut self, data: Instance) -> Self {
        self.published.push(data);
        self
    }

    /// Action to perform after execution
    pub fn action(&self) -> ActionAfterExecution {
        self.action
    }

    /// Data offered to later blocks
    pub fn published(&self) -> &[Instance] {
        &self.published
    }

    /// Split into action and published data
    pub fn into_parts(self) -> (ActionAfterExecution, Vec<Instance>) {
        (self.action, self.published)
    }
}
