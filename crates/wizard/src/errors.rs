// Archivo: errors.rs
// Propósito: errores del asistente y alias Result<T> usado por las APIs del
// crate.
use thiserror::Error;

/// Errores del asistente.
///
/// - `Transport`: fallo de red o respuesta no 2xx del endpoint.
/// - `Logic`: el servidor respondió `success: false`.
/// - `SubmissionInFlight`: ya hay un envío pendiente.
#[derive(Error, Debug)]
pub enum WizardError {
  #[error("Error de transporte: {0}")]
  Transport(String),
  #[error("Error del simulador: {0}")]
  Logic(String),
  #[error("Ya hay una simulación en curso")]
  SubmissionInFlight,
  #[error("Error de dominio: {0}")]
  Domain(#[from] simulador_domain::DomainError),
  #[error("Error de serialización: {0}")]
  Serialization(#[from] serde_json::Error),
  #[error("Otro: {0}")]
  Other(String),
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, WizardError>;
