use crate::core::http::ApiClient;
use crate::core::service::CrudService;
use crate::domain::model::Resource;

#[derive(Debug, Clone)]
pub struct VentaService {
    client: ApiClient,
}

impl VentaService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for VentaService {
    fn resource(&self) -> Resource {
        Resource::Ventas
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

