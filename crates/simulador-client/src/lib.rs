//! Cliente HTTP del endpoint de simulación.
//!
//! `HttpSimulationClient` implementa `wizard::SimulationClient` sobre
//! `reqwest`. La configuración se lee del entorno (con soporte `.env`) con
//! `new_from_env`.
pub mod config;
pub mod http_client;

pub use config::{ClientConfig, ClientError, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use http_client::HttpSimulationClient;

/// Cliente desde las variables de entorno (`SIMULADOR_URL`,
/// `SIMULADOR_TIMEOUT_SECS`).
pub fn new_from_env() -> Result<HttpSimulationClient, ClientError> {
  HttpSimulationClient::new(ClientConfig::from_env()?)
}
