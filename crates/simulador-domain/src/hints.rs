// hints.rs
//
// Textos de ayuda que acompañan a los campos numéricos mientras el usuario
// escribe. No bloquean la navegación.
use crate::field::parse_number;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintLevel {
  Normal,
  Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldHint {
  pub level: HintLevel,
  pub text: String,
}

impl FieldHint {
  fn normal(text: String) -> Self {
    Self { level: HintLevel::Normal, text }
  }

  fn warning(text: &str) -> Self {
    Self { level: HintLevel::Warning, text: text.to_string() }
  }
}

/// m² que ocupa un panel.
pub const PANEL_AREA_M2: f64 = 2.0;

/// Ayuda para el campo `name` con el valor `raw`. `None` si el campo no
/// tiene ayuda o el valor no es numérico.
pub fn field_hint(name: &str, raw: &str) -> Option<FieldHint> {
  let value = parse_number(raw)?;
  match name {
    "consumo_anual" => Some(if value < 500.0 {
      FieldHint::warning("Consumo muy bajo. Verifica si es correcto.")
    } else if value > 20000.0 {
      FieldHint::warning("Consumo muy alto. ¿Es para uso comercial o industrial?")
    } else {
      FieldHint::normal("Consumo típico: Vivienda pequeña (2000-3000 kWh), Media (3000-5000 kWh), Grande (5000+ kWh)".to_string())
    }),
    "superficie" => Some(if value < 20.0 {
      FieldHint::warning("Superficie pequeña. Podrías tener limitaciones en la potencia instalable.")
    } else {
      let paneles = (value / PANEL_AREA_M2).floor() as u64;
      FieldHint::normal(format!("Cada panel solar ocupa aproximadamente 2m². Con {}m² podrías instalar ~{} paneles.",
                                raw.trim(),
                                paneles))
    }),
    _ => None,
  }
}
