//! Response DTOs for the informational endpoints.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub environment: String,
}

/// Body of `GET /api/v1`.
#[derive(Debug, Serialize)]
pub struct ApiDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: EndpointMap,
}

/// Logical endpoint names and their paths, as advertised to clients.
///
/// The resource endpoints are published ahead of their handlers; the
/// descriptor is the platform's committed surface, not its current state.
#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub health: &'static str,
    pub equipment: &'static str,
    pub customers: &'static str,
    pub leases: &'static str,
    pub invoices: &'static str,
}

impl ApiDescriptor {
    pub fn current() -> Self {
        Self {
            name: "FleetForge API",
            version: "1.0.0",
            description: "Equipment Rental & Leasing Platform API",
            endpoints: EndpointMap {
                health: "/health",
                equipment: "/api/v1/equipment",
                customers: "/api/v1/customers",
                leases: "/api/v1/leases",
                invoices: "/api/v1/invoices",
            },
        }
    }
}
