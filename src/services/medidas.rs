use crate::core::http::ApiClient;
use crate::core::service::CrudService;
use crate::domain::model::Resource;

/// Units of measure.
#[derive(Debug, Clone)]
pub struct MedidaService {
    client: ApiClient,
}

impl MedidaService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for MedidaService {
    fn resource(&self) -> Resource {
        Resource::Medidas
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

