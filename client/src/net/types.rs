//! Wire DTOs for the catalog backend's REST API.
//!
//! DESIGN
//! ======
//! The backend is loose about scalar types: identities may arrive as `_id` or
//! `id`, as strings or numbers, and prices may be JSON numbers or numeric
//! strings. Deserializers here absorb that so the rest of the client only sees
//! `String` ids and `f64` prices. Bodies carrying both `id` and `_id` (Mongo
//! documents with virtuals) decode too; `id` wins.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Access role of a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// Profile of the signed-in user as returned by `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireSessionUser")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireProduct")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Optional image URL; the UI falls back to a placeholder when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// `SessionUser` as the backend sends it, before identity resolution.
#[derive(Deserialize)]
struct WireSessionUser {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<Value>,
    name: String,
    role: Role,
}

impl TryFrom<WireSessionUser> for SessionUser {
    type Error = String;

    fn try_from(wire: WireSessionUser) -> Result<Self, Self::Error> {
        Ok(Self { id: resolve_id(wire.id, wire.mongo_id)?, name: wire.name, role: wire.role })
    }
}

/// `Product` as the backend sends it, before identity resolution.
#[derive(Deserialize)]
struct WireProduct {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<Value>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(deserialize_with = "deserialize_price")]
    price: f64,
    #[serde(default)]
    image: Option<String>,
}

impl TryFrom<WireProduct> for Product {
    type Error = String;

    fn try_from(wire: WireProduct) -> Result<Self, Self::Error> {
        Ok(Self {
            id: resolve_id(wire.id, wire.mongo_id)?,
            name: wire.name,
            description: wire.description,
            price: wire.price,
            image: wire.image,
        })
    }
}

/// Body for `POST /api/products/add` and `PUT /api/products/edit/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub contact_number: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub success: bool,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Pick the identity from `id`, falling back to `_id`. Strings and numbers
/// are accepted; a null counts as absent.
fn resolve_id(id: Option<Value>, mongo_id: Option<Value>) -> Result<String, String> {
    match id.or(mongo_id) {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(format!("expected string or number id, got {other}")),
        None => Err("missing field `id`".to_owned()),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("price out of range")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid price {s:?}"))),
        other => Err(D::Error::custom(format!("expected numeric price, got {other}"))),
    }
}

/// Render a price without a trailing `.0` for whole amounts.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}
