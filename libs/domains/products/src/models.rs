use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - represents a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the database on creation
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Monitor Curvo de 49 pulgadas")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 399.0)]
    pub price: f64,
    /// Defaults to `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
}

/// DTO for a full update: every field is overwritten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Monitor Curvo de 49 pulgadas")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 399.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

impl Product {
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        self.availability = update.availability;
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}
