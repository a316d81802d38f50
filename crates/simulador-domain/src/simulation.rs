// simulation.rs
//
// Cuerpos intercambiados con el endpoint de simulación. El cálculo lo hace
// el servidor; aquí sólo se tipan los campos que la vista necesita y el
// resto se conserva en `extra` para reenviarlo intacto.
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Punto de la serie de ahorro acumulado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatoAnual {
  #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
  pub ano: Option<u32>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub ahorro_acumulado: Option<f64>,
}

/// Resultado calculado por el servidor.
///
/// Los campos numéricos son opcionales: un valor ausente, `null` o de otro
/// tipo queda en `None` en lugar de invalidar toda la respuesta. Qué hacer
/// con un hueco lo decide la vista.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
  /// Potencia instalada en kW.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub potencia_instalada: Option<f64>,
  #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
  pub num_paneles: Option<u32>,
  /// kWh/año.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub produccion_anual: Option<f64>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub ahorro_total_anual: Option<f64>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub autoconsumo_porcentaje: Option<f64>,
  /// Años hasta recuperar la inversión. `None` si no hay ahorro.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub periodo_retorno: Option<f64>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub costo_instalacion: Option<f64>,
  /// m² necesarios para los paneles.
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub superficie_necesaria: Option<f64>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub ahorro_25_anos: Option<f64>,
  #[serde(default, deserialize_with = "lenient_flag")]
  pub incluye_bateria: bool,
  #[serde(default, deserialize_with = "lenient_series")]
  pub datos_anuales: Vec<DatoAnual>,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, Value>,
}

fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
  where D: Deserializer<'de>,
        T: DeserializeOwned
{
  Ok(serde_json::from_value(Value::deserialize(d)?).ok())
}

/// Enteros no negativos, aceptando floats sin parte decimal (`6.0`).
fn lenient_count<'de, D>(d: D) -> Result<Option<u32>, D::Error>
  where D: Deserializer<'de>
{
  let n = Value::deserialize(d)?.as_f64();
  Ok(n.filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX)).map(|n| n as u32))
}

fn lenient_flag<'de, D>(d: D) -> Result<bool, D::Error>
  where D: Deserializer<'de>
{
  Ok(Value::deserialize(d)?.as_bool().unwrap_or(false))
}

/// Una serie que no es una lista queda vacía.
fn lenient_series<'de, D>(d: D) -> Result<Vec<DatoAnual>, D::Error>
  where D: Deserializer<'de>
{
  Ok(serde_json::from_value(Value::deserialize(d)?).unwrap_or_default())
}

/// Respuesta del endpoint: `{success, resultados?, error?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
  pub success: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub resultados: Option<SimulationResult>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl SimulationResponse {
  pub fn ok(resultados: SimulationResult) -> Self {
    Self { success: true, resultados: Some(resultados), error: None }
  }

  pub fn failed(message: &str) -> Self {
    Self { success: false, resultados: None, error: Some(message.to_string()) }
  }
}
