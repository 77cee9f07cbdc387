use serde::{Deserialize, Serialize};

/// Catalog record as the product service ships it: a flat object of string
/// fields. Values cross the boundary verbatim; the service owns parsing of
/// prices, counts, and dates, and this side never coerces or trims them.
///
/// Missing keys deserialize to empty strings and unknown keys are ignored,
/// so partial payloads from older service builds round-trip safely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub price: String,
    pub category: String,
    pub inventory: String,
    pub discount: String,
    pub like: String,
    pub created_date: String,
    pub modified_date: String,
    pub deleted_date: String,
}

impl Product {
    /// Wire field names in service order.
    pub const FIELDS: [&'static str; 11] = [
        "id",
        "name",
        "desc",
        "price",
        "category",
        "inventory",
        "discount",
        "like",
        "created_date",
        "modified_date",
        "deleted_date",
    ];

    pub fn field(&self, name: &str) -> Option<&str> {
        Some(match name {
            "id" => &self.id,
            "name" => &self.name,
            "desc" => &self.desc,
            "price" => &self.price,
            "category" => &self.category,
            "inventory" => &self.inventory,
            "discount" => &self.discount,
            "like" => &self.like,
            "created_date" => &self.created_date,
            "modified_date" => &self.modified_date,
            "deleted_date" => &self.deleted_date,
            _ => return None,
        })
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "id" => &mut self.id,
            "name" => &mut self.name,
            "desc" => &mut self.desc,
            "price" => &mut self.price,
            "category" => &mut self.category,
            "inventory" => &mut self.inventory,
            "discount" => &mut self.discount,
            "like" => &mut self.like,
            "created_date" => &mut self.created_date,
            "modified_date" => &mut self.modified_date,
            "deleted_date" => &mut self.deleted_date,
            _ => return None,
        })
    }
}

/// Sparse listing criteria. An empty value means the key is absent from the
/// resulting query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub name: String,
    pub category: String,
    pub price: String,
}
