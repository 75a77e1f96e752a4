use crate::utils::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Records are owned by the backend; this crate treats them as plain JSON.
pub type Record = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Categorias,
    Compras,
    Ventas,
    Roles,
    Medidas,
    Productos,
    Proveedores,
    Colores,
    Clientes,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Categorias,
        Resource::Compras,
        Resource::Ventas,
        Resource::Roles,
        Resource::Medidas,
        Resource::Productos,
        Resource::Proveedores,
        Resource::Colores,
        Resource::Clientes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Categorias => "categorias",
            Resource::Compras => "compras",
            Resource::Ventas => "ventas",
            Resource::Roles => "roles",
            Resource::Medidas => "medidas",
            Resource::Productos => "productos",
            Resource::Proveedores => "proveedores",
            Resource::Colores => "colores",
            Resource::Clientes => "clientes",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ApiError::UnknownResource {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Search,
    ByCategory,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::Search,
        Operation::ByCategory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Search => "search",
            Operation::ByCategory => "by_category",
        }
    }

    pub fn parse(resource: &str, name: &str) -> Result<Self> {
        let normalized = name.replace('-', "_");
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ApiError::UnknownOperation {
                resource: resource.to_string(),
                operation: name.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    /// 204, or a 2xx with an empty body.
    NoContent,
}

impl ApiResponse {
    pub fn is_no_content(&self) -> bool {
        matches!(self, ApiResponse::NoContent)
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(v) => Some(v),
            ApiResponse::NoContent => None,
        }
    }

    /// `NoContent` becomes the JSON boolean `true`.
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Json(v) => v,
            ApiResponse::NoContent => Value::Bool(true),
        }
    }
}
