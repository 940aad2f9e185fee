//! Leaf feature implementation.

use tsfeat_traits::{ColumnName, Feature, Statement};

/// A feature with no dependencies, naming a column that already exists.
///
/// Leaves anchor a feature graph to the source table. Their statement is
/// empty, so applying one returns an unchanged copy of the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafFeature {
    name: ColumnName,
}

impl LeafFeature {
    /// Create a leaf feature for an existing column.
    #[must_use]
    pub fn new(name: impl Into<ColumnName>) -> Self {
        Self { name: name.into() }
    }
}

impl Feature for LeafFeature {
    fn column_name(&self) -> ColumnName {
        self.name.clone()
    }

    fn statement(&self) -> Statement {
        Statement::Empty
    }
}
