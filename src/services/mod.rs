pub mod categorias;
pub mod clientes;
pub mod colores;
pub mod compras;
pub mod medidas;
pub mod productos;
pub mod proveedores;
pub mod roles;
pub mod ventas;

pub use categorias::CategoriaService;
pub use clientes::ClienteService;
pub use colores::ColorService;
pub use compras::CompraService;
pub use medidas::MedidaService;
pub use productos::ProductoService;
pub use proveedores::ProveedorService;
pub use roles::RolService;
pub use ventas::VentaService;

use crate::core::http::ApiClient;
use crate::core::service::{CrudService, SearchService};
use crate::domain::model::Resource;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ApiError, Result};

/// All domain services over one shared client.
#[derive(Debug, Clone)]
pub struct ApiServices {
    pub categorias: CategoriaService,
    pub compras: CompraService,
    pub ventas: VentaService,
    pub roles: RolService,
    pub medidas: MedidaService,
    pub productos: ProductoService,
    pub proveedores: ProveedorService,
    pub colores: ColorService,
    pub clientes: ClienteService,
}

impl ApiServices {
    pub fn new(client: ApiClient) -> Self {
        Self {
            categorias: CategoriaService::new(client.clone()),
            compras: CompraService::new(client.clone()),
            ventas: VentaService::new(client.clone()),
            roles: RolService::new(client.clone()),
            medidas: MedidaService::new(client.clone()),
            productos: ProductoService::new(client.clone()),
            proveedores: ProveedorService::new(client.clone()),
            colores: ColorService::new(client.clone()),
            clientes: ClienteService::new(client),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self::new(ApiClient::from_config(config)?))
    }

    pub fn crud(&self, resource: Resource) -> &dyn CrudService {
        match resource {
            Resource::Categorias => &self.categorias,
            Resource::Compras => &self.compras,
            Resource::Ventas => &self.ventas,
            Resource::Roles => &self.roles,
            Resource::Medidas => &self.medidas,
            Resource::Productos => &self.productos,
            Resource::Proveedores => &self.proveedores,
            Resource::Colores => &self.colores,
            Resource::Clientes => &self.clientes,
        }
    }

    pub fn searchable(&self, resource: Resource) -> Result<&dyn SearchService> {
        match resource {
            Resource::Categorias => Ok(&self.categorias),
            Resource::Productos => Ok(&self.productos),
            Resource::Proveedores => Ok(&self.proveedores),
            Resource::Clientes => Ok(&self.clientes),
            other => Err(ApiError::UnsupportedOperation {
                resource: other.to_string(),
                operation: "search".to_string(),
            }),
        }
    }
}
