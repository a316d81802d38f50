// Archivo: http_client.rs
// Propósito: implementación reqwest de `SimulationClient`. Todo fallo de red,
// estado no 2xx o cuerpo ilegible se entrega como `WizardError::Transport`;
// un cuerpo válido se devuelve tal cual y el controlador lo clasifica.
use crate::config::{ClientConfig, ClientError};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;
use simulador_domain::{FormValues, SimulationResponse};
use wizard::{Result, SimulationClient, WizardError};

#[derive(Debug, Clone)]
pub struct HttpSimulationClient {
  client: Client,
  config: ClientConfig,
}

impl HttpSimulationClient {
  pub fn new(config: ClientConfig) -> std::result::Result<Self, ClientError> {
    let client = Client::builder().user_agent(concat!("simulador-client/", env!("CARGO_PKG_VERSION")))
                                  .timeout(config.timeout)
                                  .build()?;
    Ok(Self { client, config })
  }

  pub fn new_from_env() -> std::result::Result<Self, ClientError> {
    Self::new(ClientConfig::from_env()?)
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }
}

#[async_trait]
impl SimulationClient for HttpSimulationClient {
  async fn simulate(&self, values: &FormValues) -> Result<SimulationResponse> {
    debug!("POST {} con {} campos", self.config.endpoint, values.len());
    let response = self.client
                       .post(self.config.endpoint.clone())
                       .header(ACCEPT, "application/json")
                       .json(values)
                       .send()
                       .await
                       .map_err(|e| WizardError::Transport(format!("fallo al enviar la simulación: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      warn!("el endpoint de simulación respondió {}", status);
      return Err(WizardError::Transport(format!("HTTP {}: {}", status, body)));
    }

    response.json::<SimulationResponse>()
            .await
            .map_err(|e| WizardError::Transport(format!("respuesta ilegible: {}", e)))
  }
}
