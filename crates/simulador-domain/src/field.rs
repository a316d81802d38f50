// field.rs
//
// Descriptores de campos del formulario del simulador y la regla de
// validación asociada a cada tipo de campo.
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mensaje usado cuando un campo requerido falla y no declara mensaje propio.
pub const GENERIC_REQUIRED_MESSAGE: &str = "Por favor, completa todos los campos requeridos.";

/// Tipo de control del formulario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
  Radio,
  Number,
  Select,
  Text,
  Checkbox,
}

/// Tipo JSON con el que se envía el valor al endpoint de simulación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
  Number,
  Text,
  Boolean,
}

impl FieldKind {
  /// Tipo de valor por defecto para este control.
  pub fn default_value_type(self) -> ValueType {
    match self {
      FieldKind::Number => ValueType::Number,
      FieldKind::Checkbox => ValueType::Boolean,
      FieldKind::Radio | FieldKind::Select | FieldKind::Text => ValueType::Text,
    }
  }
}

/// Valor de un campo tal como se envía en el cuerpo JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Bool(bool),
  Number(f64),
  Text(String),
}

impl FieldValue {
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      FieldValue::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      FieldValue::Text(s) => Some(s.as_str()),
      _ => None,
    }
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      FieldValue::Bool(b) => Some(*b),
      _ => None,
    }
  }

  /// Representación textual, tal como la escribiría un control del
  /// formulario (`30` en lugar de `30.0` para enteros).
  pub fn to_form_text(&self) -> String {
    match self {
      FieldValue::Bool(b) => b.to_string(),
      FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
      FieldValue::Number(n) => n.to_string(),
      FieldValue::Text(s) => s.clone(),
    }
  }
}

impl fmt::Display for FieldValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.to_form_text())
  }
}

/// Descriptor de un campo de un paso del asistente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
  pub name: String,
  #[serde(default)]
  pub label: String,
  pub kind: FieldKind,
  pub value_type: ValueType,
  #[serde(default = "default_required")]
  pub required: bool,
  #[serde(default)]
  pub error_message: Option<String>,
  #[serde(default)]
  pub default: Option<FieldValue>,
}

fn default_required() -> bool {
  true
}

impl FieldDescriptor {
  fn new(name: &str, kind: FieldKind) -> Self {
    Self { name: name.to_string(),
           label: name.replace('_', " "),
           kind,
           value_type: kind.default_value_type(),
           required: kind != FieldKind::Checkbox,
           error_message: None,
           default: None }
  }

  pub fn radio(name: &str) -> Self {
    Self::new(name, FieldKind::Radio)
  }

  pub fn number(name: &str) -> Self {
    Self::new(name, FieldKind::Number)
  }

  pub fn select(name: &str) -> Self {
    Self::new(name, FieldKind::Select)
  }

  pub fn text(name: &str) -> Self {
    Self::new(name, FieldKind::Text)
  }

  pub fn checkbox(name: &str) -> Self {
    Self::new(name, FieldKind::Checkbox)
  }

  pub fn with_label(mut self, label: &str) -> Self {
    self.label = label.to_string();
    self
  }

  pub fn with_message(mut self, message: &str) -> Self {
    self.error_message = Some(message.to_string());
    self
  }

  pub fn with_default(mut self, value: FieldValue) -> Self {
    self.default = Some(value);
    self
  }

  /// Marca un grupo de radio (o select) cuyos valores viajan como número.
  pub fn numeric(mut self) -> Self {
    self.value_type = ValueType::Number;
    self
  }

  pub fn optional(mut self) -> Self {
    self.required = false;
    self
  }

  /// Mensaje que se muestra al usuario cuando el campo no es válido.
  pub fn message(&self) -> &str {
    self.error_message.as_deref().unwrap_or(GENERIC_REQUIRED_MESSAGE)
  }

  /// Aplica la regla del tipo de campo al valor crudo leído del formulario.
  /// `None` significa campo ausente o grupo de radio sin selección.
  ///
  /// Los campos no requeridos y las casillas siempre son válidos.
  pub fn check(&self, raw: Option<&str>) -> Result<(), DomainError> {
    if !self.required {
      return Ok(());
    }
    let ok = match self.kind {
      FieldKind::Checkbox => true,
      FieldKind::Radio | FieldKind::Select => raw.map(|v| !v.is_empty()).unwrap_or(false),
      FieldKind::Text => raw.map(|v| !v.trim().is_empty()).unwrap_or(false),
      FieldKind::Number => raw.and_then(parse_number).map(|n| n > 0.0).unwrap_or(false),
    };
    if ok {
      Ok(())
    } else {
      Err(DomainError::ValidationError(self.message().to_string()))
    }
  }

  /// Convierte el valor crudo al `FieldValue` que se envía, usando el
  /// default del campo (o el cero del tipo) cuando falta o no se puede
  /// interpretar.
  pub fn coerce(&self, raw: Option<&str>) -> FieldValue {
    match self.value_type {
      ValueType::Number => {
        // Un cero cuenta como ausente: cae al default del campo si lo hay.
        let parsed = raw.and_then(parse_number).filter(|n| *n != 0.0);
        match parsed {
          Some(n) => FieldValue::Number(n),
          None => FieldValue::Number(self.default.as_ref().and_then(FieldValue::as_f64).unwrap_or(0.0)),
        }
      }
      ValueType::Boolean => {
        let checked = raw.map(is_checked_text).unwrap_or(false);
        if raw.is_none() {
          FieldValue::Bool(self.default.as_ref().and_then(FieldValue::as_bool).unwrap_or(false))
        } else {
          FieldValue::Bool(checked)
        }
      }
      ValueType::Text => match raw {
        Some(v) if !v.is_empty() => FieldValue::Text(v.to_string()),
        _ => FieldValue::Text(self.default.as_ref().map(FieldValue::to_form_text).unwrap_or_default()),
      },
    }
  }
}

/// Interpreta texto numérico de un control: recorta espacios y exige un
/// número finito.
pub fn parse_number(raw: &str) -> Option<f64> {
  raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_checked_text(raw: &str) -> bool {
  matches!(raw.trim().to_lowercase().as_str(), "true" | "on" | "1" | "checked")
}
