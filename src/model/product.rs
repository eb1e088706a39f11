use crate::model::{Changeset, ColumnDescriptor, ColumnType, Model, TableDescriptor};
use crate::sql::BindValue;
use crate::service::Validate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl Model for Product {
    const TABLE: TableDescriptor = TableDescriptor {
        name: "products",
        pk: "id",
        columns: &[
            ColumnDescriptor { name: "name", column_type: ColumnType::Text },
            ColumnDescriptor { name: "description", column_type: ColumnType::Text },
            ColumnDescriptor { name: "price", column_type: ColumnType::Integer },
        ],
    };

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: i64,
}

/// Full replacement (PUT): every mutable field is required.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: i64,
}

/// Partial update (PATCH): only fields present in the body are written. `null` counts as absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductUpdatePartial {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
}

impl Validate for ProductCreate {}
impl Validate for ProductUpdate {}
impl Validate for ProductUpdatePartial {}

impl Changeset for ProductCreate {
    fn changes(&self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("name", self.name.as_str().into()),
            ("description", self.description.as_str().into()),
            ("price", self.price.into()),
        ]
    }
}

impl Changeset for ProductUpdate {
    fn changes(&self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("name", self.name.as_str().into()),
            ("description", self.description.as_str().into()),
            ("price", self.price.into()),
        ]
    }
}

impl Changeset for ProductUpdatePartial {
    fn changes(&self) -> Vec<(&'static str, BindValue)> {
        let mut out = Vec::new();
        if let Some(name) = &self.name {
            out.push(("name", name.as_str().into()));
        }
        if let Some(description) = &self.description {
            out.push(("description", description.as_str().into()));
        }
        if let Some(price) = self.price {
            out.push(("price", price.into()));
        }
        out
    }
}
