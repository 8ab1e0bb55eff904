use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the upstream suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierId {
    Fruit,
    Vegetable,
    Grain,
}

impl SupplierId {
    /// All suppliers in sequential priority order.
    pub const ALL: [SupplierId; 3] = [SupplierId::Fruit, SupplierId::Vegetable, SupplierId::Grain];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierId::Fruit => "fruit",
            SupplierId::Vegetable => "vegetable",
            SupplierId::Grain => "grain",
        }
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
