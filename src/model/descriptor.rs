//! Static table descriptors: every model declares its table by hand instead of deriving it.

use crate::sql::BindValue;
use sqlx::any::AnyRow;
use sqlx::FromRow;

/// Column SQL type, rendered per backend by the table creator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDescriptor {
    pub name: &'static str,
    pub column_type: ColumnType,
}

/// Table layout. The key column `pk` is an auto-assigned integer.
#[derive(Clone, Copy, Debug)]
pub struct TableDescriptor {
    pub name: &'static str,
    pub pk: &'static str,
    /// Non-key columns, in select order.
    pub columns: &'static [ColumnDescriptor],
}

impl TableDescriptor {
    /// Key column followed by every data column.
    pub fn select_columns(&self) -> Vec<&'static str> {
        std::iter::once(self.pk)
            .chain(self.columns.iter().map(|c| c.name))
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// A persisted record with an integer identity.
pub trait Model: for<'r> FromRow<'r, AnyRow> + Send + Unpin {
    const TABLE: TableDescriptor;

    fn id(&self) -> i64;
}

/// Column assignments carried by a create or update payload.
pub trait Changeset {
    /// Columns this payload sets. Absent fields are omitted.
    fn changes(&self) -> Vec<(&'static str, BindValue)>;
}
