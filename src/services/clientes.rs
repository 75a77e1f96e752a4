use crate::core::http::ApiClient;
use crate::core::service::{CrudService, SearchService};
use crate::domain::model::Resource;

/// Customers.
#[derive(Debug, Clone)]
pub struct ClienteService {
    client: ApiClient,
}

impl ClienteService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for ClienteService {
    fn resource(&self) -> Resource {
        Resource::Clientes
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl SearchService for ClienteService {}
