//! Category tree types

use serde::{Deserialize, Serialize};

/// A product category
///
/// Categories form a tree; the server inlines children when asked for
/// roots, and omits `parent_id` inside nested children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub children: Option<Vec<Category>>,
}
