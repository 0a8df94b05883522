//! Enumeration types used in level documents.

use serde::{Deserialize, Serialize};

/// Creep archetype tag.
///
/// The game instantiates creeps by this name. Generated documents
/// currently use only [`CreepType::GenericCreep`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreepType {
    /// Basic grid walker with no special behavior.
    #[default]
    GenericCreep,
}
