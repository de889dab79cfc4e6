use serde::{Deserialize, Serialize};

use super::Category;

/// Represents a catalog product returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable unique identifier (e.g., "elec_002")
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
        }
    }
}
