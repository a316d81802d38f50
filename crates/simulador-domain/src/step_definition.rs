// step_definition.rs
use crate::{DomainError, FieldDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Un paso del asistente con sus campos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
  /// Número del paso (1..=total).
  pub number: usize,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub fields: Vec<FieldDescriptor>,
}

impl StepDefinition {
  pub fn new(number: usize, title: &str, fields: Vec<FieldDescriptor>) -> Self {
    Self { number, title: title.to_string(), fields }
  }

  /// Campos que la validación del paso debe revisar.
  pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
    self.fields.iter().filter(|f| f.required)
  }
}

/// Conjunto ordenado de pasos de una variante de página.
///
/// El último paso es el de resultados: no tiene campos y sólo se alcanza
/// tras validar los anteriores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition", into = "RawDefinition")]
pub struct WizardDefinition {
  steps: Vec<StepDefinition>,
}

#[derive(Serialize, Deserialize)]
struct RawDefinition {
  total_steps: usize,
  steps: Vec<StepDefinition>,
}

impl TryFrom<RawDefinition> for WizardDefinition {
  type Error = DomainError;

  fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
    WizardDefinition::new(raw.steps, raw.total_steps)
  }
}

impl From<WizardDefinition> for RawDefinition {
  fn from(def: WizardDefinition) -> Self {
    RawDefinition { total_steps: def.steps.len(), steps: def.steps }
  }
}

impl WizardDefinition {
  pub fn new(steps: Vec<StepDefinition>, total_steps: usize) -> Result<Self, DomainError> {
    if total_steps < 2 {
      return Err(DomainError::ConfigurationError(format!("se requieren al menos 2 pasos, hay {}", total_steps)));
    }
    if steps.len() != total_steps {
      return Err(DomainError::ConfigurationError(format!("total_steps={} pero se definieron {} pasos",
                                                         total_steps,
                                                         steps.len())));
    }
    let mut seen = HashSet::new();
    for (idx, step) in steps.iter().enumerate() {
      if step.number != idx + 1 {
        return Err(DomainError::ConfigurationError(format!("el paso en la posición {} tiene número {}",
                                                           idx + 1,
                                                           step.number)));
      }
      for field in &step.fields {
        if field.name.trim().is_empty() {
          return Err(DomainError::ConfigurationError(format!("campo sin nombre en el paso {}", step.number)));
        }
        if !seen.insert(field.name.clone()) {
          return Err(DomainError::ConfigurationError(format!("campo duplicado: {}", field.name)));
        }
      }
    }
    if steps.last().map(|s| !s.fields.is_empty()).unwrap_or(false) {
      return Err(DomainError::ConfigurationError("el paso de resultados no puede tener campos".to_string()));
    }
    Ok(Self { steps })
  }

  /// Carga una definición desde JSON (`{"total_steps": n, "steps": [...]}`).
  pub fn from_json(json: &str) -> Result<Self, DomainError> {
    serde_json::from_str(json).map_err(|e| DomainError::ConfigurationError(e.to_string()))
  }

  pub fn total_steps(&self) -> usize {
    self.steps.len()
  }

  pub fn steps(&self) -> &[StepDefinition] {
    &self.steps
  }

  /// Paso por número (1-based).
  pub fn step(&self, number: usize) -> Option<&StepDefinition> {
    number.checked_sub(1).and_then(|i| self.steps.get(i))
  }

  pub fn results_step(&self) -> usize {
    self.steps.len()
  }

  /// Todos los campos de todas las etapas, en orden de declaración.
  pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
    self.steps.iter().flat_map(|s| s.fields.iter())
  }

  pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
    self.fields().find(|f| f.name == name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn step(n: usize, fields: Vec<FieldDescriptor>) -> StepDefinition {
    StepDefinition::new(n, "", fields)
  }

  #[test]
  fn rejects_total_mismatch() {
    let r = WizardDefinition::new(vec![step(1, vec![]), step(2, vec![])], 3);
    assert!(matches!(r, Err(DomainError::ConfigurationError(_))));
  }

  #[test]
  fn rejects_duplicate_fields() {
    let r = WizardDefinition::new(vec![step(1, vec![FieldDescriptor::number("superficie")]),
                                       step(2, vec![FieldDescriptor::number("superficie")]),
                                       step(3, vec![])],
                                  3);
    assert!(matches!(r, Err(DomainError::ConfigurationError(m)) if m.contains("superficie")));
  }

  #[test]
  fn rejects_fields_on_results_step() {
    let r = WizardDefinition::new(vec![step(1, vec![]), step(2, vec![FieldDescriptor::text("x")])], 2);
    assert!(r.is_err());
  }

  #[test]
  fn rejects_out_of_order_numbers() {
    let r = WizardDefinition::new(vec![step(2, vec![]), step(1, vec![])], 2);
    assert!(r.is_err());
  }

  #[test]
  fn step_lookup_is_one_based() {
    let def = WizardDefinition::new(vec![step(1, vec![FieldDescriptor::text("a")]), step(2, vec![])], 2).unwrap();
    assert_eq!(def.step(1).unwrap().fields[0].name, "a");
    assert!(def.step(0).is_none());
    assert!(def.step(3).is_none());
    assert_eq!(def.results_step(), 2);
  }
}
