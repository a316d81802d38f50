// Archivo: config.rs
// Propósito: configuración del cliente de simulación y sus errores.
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;
use wizard::WizardError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/simulador/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_URL: &str = "SIMULADOR_URL";
pub const ENV_TIMEOUT: &str = "SIMULADOR_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ClientError {
  #[error("URL de simulación inválida '{0}': {1}")]
  InvalidUrl(String, String),
  #[error("Timeout inválido '{0}': debe ser un entero positivo de segundos")]
  InvalidTimeout(String),
  #[error("No se pudo crear el cliente HTTP: {0}")]
  Http(#[from] reqwest::Error),
}

impl From<ClientError> for WizardError {
  fn from(e: ClientError) -> Self {
    WizardError::Other(e.to_string())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  pub endpoint: Url,
  pub timeout: Duration,
}

impl ClientConfig {
  pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
    let url = Url::parse(endpoint).map_err(|e| ClientError::InvalidUrl(endpoint.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
      return Err(ClientError::InvalidUrl(endpoint.to_string(), format!("esquema '{}' no soportado", url.scheme())));
    }
    if timeout.is_zero() {
      return Err(ClientError::InvalidTimeout("0".into()));
    }
    Ok(Self { endpoint: url, timeout })
  }

  /// Lee `SIMULADOR_URL` y `SIMULADOR_TIMEOUT_SECS`, cargando antes `.env`
  /// si existe. Las variables ausentes toman los valores por defecto.
  pub fn from_env() -> Result<Self, ClientError> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Igual que `from_env` pero con una fuente de variables arbitraria.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where F: Fn(&str) -> Option<String>
  {
    let endpoint = lookup(ENV_URL).filter(|v| !v.trim().is_empty())
                                  .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let timeout = match lookup(ENV_TIMEOUT) {
      Some(raw) => {
        let secs = raw.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| ClientError::InvalidTimeout(raw.clone()))?;
        Duration::from_secs(secs)
      }
      None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    };
    Self::new(endpoint.trim(), timeout)
  }
}

impl Default for ClientConfig {
  fn default() -> Self {
    // DEFAULT_ENDPOINT es una URL fija y válida.
    Self { endpoint: Url::parse(DEFAULT_ENDPOINT).unwrap_or_else(|_| unreachable!("URL por defecto inválida")),
           timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k| map.get(k).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let cfg = ClientConfig::from_lookup(vars(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.endpoint.as_str(), DEFAULT_ENDPOINT);
    assert_eq!(cfg.timeout, Duration::from_secs(30));
  }

  #[test]
  fn reads_url_and_timeout() {
    let cfg = ClientConfig::from_lookup(vars(&[(ENV_URL, "https://inglat.example/simulador/"),
                                               (ENV_TIMEOUT, " 5 ")])).unwrap();
    assert_eq!(cfg.endpoint.host_str(), Some("inglat.example"));
    assert_eq!(cfg.timeout, Duration::from_secs(5));
  }

  #[test]
  fn rejects_bad_values() {
    assert!(matches!(ClientConfig::from_lookup(vars(&[(ENV_TIMEOUT, "0")])),
                     Err(ClientError::InvalidTimeout(_))));
    assert!(matches!(ClientConfig::from_lookup(vars(&[(ENV_TIMEOUT, "medio minuto")])),
                     Err(ClientError::InvalidTimeout(_))));
    assert!(matches!(ClientConfig::from_lookup(vars(&[(ENV_URL, "no es una url")])),
                     Err(ClientError::InvalidUrl(..))));
    assert!(matches!(ClientConfig::from_lookup(vars(&[(ENV_URL, "ftp://host/simulador/")])),
                     Err(ClientError::InvalidUrl(..))));
  }

  #[test]
  fn converts_into_wizard_error() {
    let e: WizardError = ClientError::InvalidTimeout("x".into()).into();
    assert!(matches!(e, WizardError::Other(m) if m.contains("Timeout inválido")));
  }
}
