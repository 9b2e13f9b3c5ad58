//! Error types for the Grist cell core.

use crate::id::CellTypeId;
use std::error::Error;
use std::fmt;

/// Errors from behavior-registry setup.
///
/// Dispatch itself never errors (an unregistered identity falls back to
/// permissive defaults), so registration is the only failure surface at
/// this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A behavior is already registered for this cell type.
    ///
    /// Registration is first-come-only: allowing a second table for the
    /// same identity would make resolution depend on registration order.
    DuplicateBehavior {
        /// The identity that already has a behavior.
        type_id: CellTypeId,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBehavior { type_id } => {
                write!(f, "behavior already registered for cell type {type_id}")
            }
        }
    }
}

impl Error for RegistryError {}
