use crate::core::endpoints::Endpoints;
use crate::core::http::ApiClient;
use crate::domain::model::{ApiResponse, Operation, Record, Resource};
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Operations shared by every resource group.
///
/// Implementors only name their resource and hand out the client; every
/// call goes through the same registry lookup and response handling.
#[async_trait]
pub trait CrudService: Send + Sync {
    fn resource(&self) -> Resource;
    fn client(&self) -> &ApiClient;

    async fn call(
        &self,
        operation: Operation,
        params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let endpoint = Endpoints::lookup(self.resource(), operation)?;
        self.client().execute(&endpoint, params, body).await
    }

    async fn list_all(&self) -> Result<Value> {
        let response = self.call(Operation::List, &[], None).await?;
        expect_json(self.resource(), Operation::List, response)
    }

    async fn get_by_id(&self, id: &str) -> Result<Value> {
        let response = self.call(Operation::Get, &[("id", id)], None).await?;
        expect_json(self.resource(), Operation::Get, response)
    }

    async fn create(&self, record: &Value) -> Result<Value> {
        let response = self.call(Operation::Create, &[], Some(record)).await?;
        expect_json(self.resource(), Operation::Create, response)
    }

    async fn update(&self, id: &str, record: &Value) -> Result<ApiResponse> {
        self.call(Operation::Update, &[("id", id)], Some(record))
            .await
    }

    async fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.call(Operation::Delete, &[("id", id)], None).await
    }
}

/// Search through the backend's `buscar` endpoint.
#[async_trait]
pub trait SearchService: CrudService {
    async fn search(&self, term: &str) -> Result<Value> {
        let response = self
            .call(Operation::Search, &[("termino", term)], None)
            .await?;
        expect_json(self.resource(), Operation::Search, response)
    }

    /// Lists everything, then keeps records whose `nombre` contains `term`.
    async fn search_local(&self, term: &str) -> Result<Vec<Record>> {
        let all = self.list_all().await?;
        filter_by_substring(all, "nombre", term)
    }
}

pub(crate) fn expect_json(
    resource: Resource,
    operation: Operation,
    response: ApiResponse,
) -> Result<Value> {
    match response {
        ApiResponse::Json(value) => Ok(value),
        ApiResponse::NoContent => Err(ApiError::UnexpectedPayload {
            message: format!("{} {} returned no content", resource, operation),
        }),
    }
}

/// Keeps the records whose `field` contains `term`, ignoring case.
///
/// `records` must be a JSON array; the relative order is preserved.
/// Records without a string `field` never match.
pub fn filter_by_substring(records: Value, field: &str, term: &str) -> Result<Vec<Record>> {
    let Value::Array(items) = records else {
        return Err(ApiError::UnexpectedPayload {
            message: format!("expected a JSON array to filter on '{}'", field),
        });
    };

    let needle = term.to_lowercase();
    Ok(items
        .into_iter()
        .filter(|item| {
            item.get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect())
}
