//! Field rules for the product routes and the request types they guard.
//!
//! Every failing rule yields one entry in the `400 { errors }` body, so an empty
//! create body reports 4 errors and an empty update body 5.

use axum_helpers::{AppError, Check, FieldRule, RequestInput, ValidatedRequest};

use crate::models::{CreateProduct, UpdateProduct};

/// Client-facing messages.
pub mod messages {
    pub const INVALID_ID: &str = "ID no valido";
    pub const EMPTY_NAME: &str = "El nombre del Producto no puede ir vacio";
    pub const NAME_TOO_LONG: &str = "El nombre del Producto no puede superar los 100 caracteres";
    pub const INVALID_VALUE: &str = "Valor no valido";
    pub const EMPTY_PRICE: &str = "El precio del Producto no puede ir vacio";
    pub const INVALID_PRICE: &str = "Precio no valido";
    pub const INVALID_AVAILABILITY: &str = "Valor para disponibilidad no valido";
    pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
    pub const PRODUCT_DELETED: &str = "Producto Eliminado";
}

/// Matches the `products.name` column width.
pub const NAME_MAX_LEN: usize = 100;

const ID: FieldRule =
    FieldRule::param("id", Check::Int).with_message("INVALID_ID", messages::INVALID_ID);

const NAME_NOT_EMPTY: FieldRule =
    FieldRule::body("name", Check::NotEmpty).with_message("EMPTY_NAME", messages::EMPTY_NAME);
const NAME_MAX_LENGTH: FieldRule = FieldRule::body("name", Check::MaxLength(NAME_MAX_LEN))
    .with_message("NAME_TOO_LONG", messages::NAME_TOO_LONG);

const PRICE_NUMERIC: FieldRule =
    FieldRule::body("price", Check::Numeric).with_message("INVALID_VALUE", messages::INVALID_VALUE);
const PRICE_NOT_EMPTY: FieldRule =
    FieldRule::body("price", Check::NotEmpty).with_message("EMPTY_PRICE", messages::EMPTY_PRICE);
const PRICE_POSITIVE: FieldRule = FieldRule::body("price", Check::GreaterThan(0.0))
    .with_message("INVALID_PRICE", messages::INVALID_PRICE);

const AVAILABILITY: FieldRule = FieldRule::body("availability", Check::Boolean)
    .with_message("INVALID_AVAILABILITY", messages::INVALID_AVAILABILITY);

pub const ID_RULES: &[FieldRule] = &[ID];

pub const CREATE_RULES: &[FieldRule] = &[
    NAME_NOT_EMPTY,
    NAME_MAX_LENGTH,
    PRICE_NUMERIC,
    PRICE_NOT_EMPTY,
    PRICE_POSITIVE,
    AVAILABILITY.optional(),
];

pub const UPDATE_RULES: &[FieldRule] = &[
    ID,
    NAME_NOT_EMPTY,
    NAME_MAX_LENGTH,
    PRICE_NUMERIC,
    PRICE_NOT_EMPTY,
    PRICE_POSITIVE,
    AVAILABILITY,
];

/// Path id of a product route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

/// Path id plus full replacement body of `PUT /{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductRequest {
    pub id: i32,
    pub input: UpdateProduct,
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("Missing or malformed field '{}'", field))
}

fn product_id(input: &RequestInput) -> Result<i32, AppError> {
    input.param_i32("id").ok_or_else(|| missing("id"))
}

impl ValidatedRequest for ProductId {
    const RULES: &'static [FieldRule] = ID_RULES;

    fn from_input(input: RequestInput) -> Result<Self, AppError> {
        product_id(&input).map(ProductId)
    }
}

impl ValidatedRequest for CreateProduct {
    const RULES: &'static [FieldRule] = CREATE_RULES;

    fn from_input(input: RequestInput) -> Result<Self, AppError> {
        let availability = if input.has_body_field("availability") {
            Some(input.body_bool("availability").ok_or_else(|| missing("availability"))?)
        } else {
            None
        };

        Ok(Self {
            name: input.body_string("name").ok_or_else(|| missing("name"))?,
            price: input.body_f64("price").ok_or_else(|| missing("price"))?,
            availability,
        })
    }
}

impl ValidatedRequest for UpdateProductRequest {
    const RULES: &'static [FieldRule] = UPDATE_RULES;

    fn from_input(input: RequestInput) -> Result<Self, AppError> {
        Ok(Self {
            id: product_id(&input)?,
            input: UpdateProduct {
                name: input.body_string("name").ok_or_else(|| missing("name"))?,
                price: input.body_f64("price").ok_or_else(|| missing("price"))?,
                availability: input
                    .body_bool("availability")
                    .ok_or_else(|| missing("availability"))?,
            },
        })
    }
}
