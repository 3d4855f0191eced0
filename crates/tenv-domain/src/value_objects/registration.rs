use std::fmt;

use super::TypeKey;
use crate::constants::NO_MARK;

/// Identity of a pipeline stage: block type plus optional mark
///
/// Two keys are equal iff the block types match and the marks are equal
/// (an absent mark only equals another absent mark).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RegistrationKey {
    block_type: TypeKey,
    mark: Option<String>,
}

impl RegistrationKey {
    /// Key for block type `B` with an optional mark
    pub fn of<B: ?Sized + 'static>(mark: Option<&str>) -> Self {
        Self::new(TypeKey::of::<B>(), mark.map(str::to_owned))
    }

    /// Key from its parts
    pub fn new(block_type: TypeKey, mark: Option<String>) -> Self {
        Self { block_type, mark }
    }

    /// Registered block type
    pub fn block_type(&self) -> &TypeKey {
        &self.block_type
    }

    /// Mark distinguishing registrations of the same type
    pub fn mark(&self) -> Option<&str> {
        self.mark.as_deref()
    }

    /// Whether the key registers block type `B`, regardless of mark
    pub fn is<B: ?Sized + 'static>(&self) -> bool {
        self.block_type.is::<B>()
    }
}

impl fmt::Display for RegistrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockType: {}, Mark: {}",
            self.block_type,
            self.mark.as_deref().unwrap_or(NO_MARK)
        )
    }
}

impl fmt::Debug for RegistrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Position of an inserted block relative to the block it is anchored on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    /// Immediately after the anchor
    After,
    /// Immediately before the anchor
    Before,
}
