// variant.rs
use crate::{DomainError, FieldDescriptor, FieldValue, StepDefinition, WizardDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variantes de página del simulador. Cada una es una configuración de
/// pasos independiente; no comparten esquema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardVariant {
  /// Tres pasos: consumo, tejado, resultados.
  #[default]
  Basico,
  /// Cinco pasos: consumo, tipo de tejado, orientación, extras, resultados.
  Completo,
}

impl fmt::Display for WizardVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      WizardVariant::Basico => "basico",
      WizardVariant::Completo => "completo",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for WizardVariant {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "basico" | "básico" => Ok(WizardVariant::Basico),
      "completo" => Ok(WizardVariant::Completo),
      other => Err(DomainError::ConfigurationError(format!("variante desconocida: {}", other))),
    }
  }
}

fn consumo_anual() -> FieldDescriptor {
  FieldDescriptor::number("consumo_anual").with_label("Consumo anual (kWh)")
                                          .with_message("Ingresa un consumo anual válido")
}

fn ubicacion() -> FieldDescriptor {
  FieldDescriptor::select("ubicacion").with_label("Provincia").with_message("Selecciona tu provincia")
}

fn orientacion() -> FieldDescriptor {
  FieldDescriptor::radio("orientacion").with_label("Orientación del tejado")
                                       .with_message("Selecciona la orientación del tejado")
                                       .with_default(FieldValue::Text("N".to_string()))
}

fn inclinacion() -> FieldDescriptor {
  FieldDescriptor::radio("inclinacion").numeric()
                                       .with_label("Inclinación (°)")
                                       .with_message("Selecciona el ángulo del tejado")
                                       .with_default(FieldValue::Number(30.0))
}

fn superficie() -> FieldDescriptor {
  FieldDescriptor::number("superficie").with_label("Superficie disponible (m²)")
                                       .with_message("Ingresa una superficie disponible válida")
}

impl WizardVariant {
  pub fn total_steps(self) -> usize {
    match self {
      WizardVariant::Basico => 3,
      WizardVariant::Completo => 5,
    }
  }

  fn steps(self) -> Vec<StepDefinition> {
    match self {
      WizardVariant::Basico => vec![StepDefinition::new(1, "Consumo y ubicación", vec![consumo_anual(), ubicacion()]),
                                    StepDefinition::new(2, "Tu tejado", vec![orientacion(), inclinacion(), superficie()]),
                                    StepDefinition::new(3, "Resultados", vec![])],
      WizardVariant::Completo => {
        vec![StepDefinition::new(1, "Consumo y ubicación", vec![consumo_anual(), ubicacion()]),
             StepDefinition::new(2,
                                 "Tipo de tejado",
                                 vec![FieldDescriptor::select("tipo_tejado").with_label("Tipo de tejado")
                                                                            .with_message("Selecciona el tipo de tejado"),
                                      superficie()]),
             StepDefinition::new(3, "Orientación", vec![orientacion(), inclinacion()]),
             StepDefinition::new(4,
                                 "Extras",
                                 vec![FieldDescriptor::checkbox("coche_electrico").with_label("Coche eléctrico"),
                                      FieldDescriptor::checkbox("bateria").with_label("Batería")]),
             StepDefinition::new(5, "Resultados", vec![])]
      }
    }
  }

  /// Definición de pasos de la variante.
  pub fn definition(self) -> WizardDefinition {
    // Las definiciones integradas cumplen las reglas de `WizardDefinition::new`.
    match WizardDefinition::new(self.steps(), self.total_steps()) {
      Ok(def) => def,
      Err(e) => unreachable!("definición integrada inválida ({}): {}", self, e),
    }
  }
}
