//! Shapes shared by several models

use serde::{Deserialize, Serialize};

/// Reference to another entity by id, the `{ "id": n }` shape every
/// create payload uses for its relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}
