//! Endpoint registry and URL construction.
//!
//! Every resource group owns a fixed set of path templates. Templates use
//! `:name` placeholders which must all be supplied at call time; a template
//! with a missing value is rejected before any request is made.

use crate::domain::model::{Operation, Resource};
use crate::utils::error::{ApiError, Result};
use reqwest::Method;
use std::sync::OnceLock;
use url::Url;

fn placeholder_pattern() -> &'static regex::Regex {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex::Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("placeholder pattern is valid")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate<'a> {
    raw: &'a str,
}

impl<'a> PathTemplate<'a> {
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Placeholder names in the order they appear.
    pub fn placeholders(&self) -> Vec<&'a str> {
        placeholder_pattern()
            .captures_iter(self.raw)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Substitutes every placeholder from `params` and returns the path.
    ///
    /// Same rules as [`PathTemplate::resolve`].
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String> {
        self.resolve(RENDER_ORIGIN, params)
            .map(|url| url.path().to_string())
    }

    /// Appends the template to `base`, one path segment at a time.
    ///
    /// Each segment goes through `PathSegmentsMut::push`, so a substituted
    /// value is percent-encoded (`/`, `\`, `?`, `#`, `%` included) and can
    /// never split into more segments. Missing or empty values yield
    /// `UnresolvedPlaceholder`; a segment that ends up as `.` or `..` yields
    /// `InvalidPathValue`.
    pub fn resolve(&self, base: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(base).map_err(|e| ApiError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        let resolved: Vec<String> = self
            .raw
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| self.substitute(part, params))
            .collect::<Result<_>>()?;

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: base.to_string(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(resolved.iter().map(String::as_str));

        Ok(url)
    }

    fn substitute(&self, part: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut segment = String::with_capacity(part.len());
        let mut last = 0;

        for caps in placeholder_pattern().captures_iter(part) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = params
                .iter()
                .find(|(key, _)| *key == name.as_str())
                .map(|(_, value)| *value)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ApiError::UnresolvedPlaceholder {
                    placeholder: name.as_str().to_string(),
                    template: self.raw.to_string(),
                })?;

            segment.push_str(&part[last..whole.start()]);
            segment.push_str(value);
            last = whole.end();
        }
        segment.push_str(&part[last..]);

        if segment == "." || segment == ".." {
            return Err(ApiError::InvalidPathValue {
                value: segment,
                template: self.raw.to_string(),
            });
        }
        Ok(segment)
    }
}

// Only the path of a rendered template is kept.
const RENDER_ORIGIN: &str = "http://localhost";

/// Prefixes a literal `path` with the configured origin.
pub fn build_api_url(base: &str, path: &str) -> Result<String> {
    let joined = format!("{}{}", base.trim_end_matches('/'), path);
    Url::parse(&joined)
        .map(String::from)
        .map_err(|e| ApiError::InvalidUrl {
            url: joined,
            reason: e.to_string(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDef {
    pub resource: Resource,
    pub operation: Operation,
    pub method: Method,
    pub template: PathTemplate<'static>,
}

/// Path templates of one resource group.
#[derive(Debug)]
pub struct ResourceEndpoints {
    pub resource: Resource,
    pub collection: &'static str,
    pub item: &'static str,
    pub search: Option<&'static str>,
    pub by_category: Option<&'static str>,
}

impl ResourceEndpoints {
    pub fn template(&self, operation: Operation) -> Option<&'static str> {
        match operation {
            Operation::List | Operation::Create => Some(self.collection),
            Operation::Get | Operation::Update | Operation::Delete => Some(self.item),
            Operation::Search => self.search,
            Operation::ByCategory => self.by_category,
        }
    }

    pub fn operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| self.template(*op).is_some())
            .collect()
    }
}

static REGISTRY: [ResourceEndpoints; 9] = [
    ResourceEndpoints {
        resource: Resource::Categorias,
        collection: "/api/categorias",
        item: "/api/categorias/:id",
        search: Some("/api/categorias/buscar/:termino"),
        by_category: None,
    },
    ResourceEndpoints {
        resource: Resource::Compras,
        collection: "/api/compras",
        item: "/api/compras/:id",
        search: None,
        by_category: None,
    },
    ResourceEndpoints {
        resource: Resource::Ventas,
        collection: "/api/ventas",
        item: "/api/ventas/:id",
        search: None,
        by_category: None,
    },
    ResourceEndpoints {
        resource: Resource::Roles,
        collection: "/api/roles",
        item: "/api/roles/:id",
        search: None,
        by_category: None,
    },
    ResourceEndpoints {
        resource: Resource::Medidas,
        collection: "/api/medidas",
        item: "/api/medidas/:id",
        search: None,
        by_category: None,
    },
    ResourceEndpoints {
        resource: Resource::Productos,
        collection: "/api/productos",
        item: "/api/productos/:id",
        search: Some("/api/productos/buscar/:termino"),
        by_category: Some("/api/productos/categoria/:categoria"),
    },
    ResourceEndpoints {
        resource: Resource::Proveedores,
        collection: "/api/proveedores",
        item: "/api/proveedores/:id",
        search: Some("/api/proveedores/buscar/:termino"),
        by_category: None,
    },
    ResourceEndpoints {
        resource: Resource::Colores,
        collection: "/api/colores",
        item: "/api/colores/:id",
        search: None,
        by_category: None,
    },
    ResourceEndpoints {
        resource: Resource::Clientes,
        collection: "/api/clientes",
        item: "/api/clientes/:id",
        search: Some("/api/clientes/buscar/:termino"),
        by_category: None,
    },
];

pub struct Endpoints;

impl Endpoints {
    pub fn group(resource: Resource) -> &'static ResourceEndpoints {
        // REGISTRY is declared in Resource variant order.
        &REGISTRY[resource as usize]
    }

    pub fn lookup(resource: Resource, operation: Operation) -> Result<EndpointDef> {
        let raw = Self::group(resource).template(operation).ok_or_else(|| {
            ApiError::UnsupportedOperation {
                resource: resource.to_string(),
                operation: operation.to_string(),
            }
        })?;

        Ok(EndpointDef {
            resource,
            operation,
            method: method_for(operation),
            template: PathTemplate::new(raw),
        })
    }

    pub fn lookup_by_name(resource: &str, operation: &str) -> Result<EndpointDef> {
        let parsed: Resource = resource.parse()?;
        let op = Operation::parse(resource, operation)?;
        Self::lookup(parsed, op)
    }
}

pub fn method_for(operation: Operation) -> Method {
    match operation {
        Operation::List | Operation::Get | Operation::Search | Operation::ByCategory => {
            Method::GET
        }
        Operation::Create => Method::POST,
        Operation::Update => Method::PUT,
        Operation::Delete => Method::DELETE,
    }
}
