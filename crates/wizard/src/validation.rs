// Archivo: validation.rs
// Propósito: validar los campos requeridos de un paso leyendo sus valores a
// través del `FormAdapter`.
use crate::collaborators::FormAdapter;
use simulador_domain::{DomainError, StepDefinition, GENERIC_REQUIRED_MESSAGE};

/// Error de un campo concreto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// `true` si el mensaje lo declara el campo (no es el genérico).
    pub specific: bool,
}

/// Resultado de validar un paso.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
    passed: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Campos que fallaron, en orden de declaración.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Campos requeridos que superaron la validación.
    pub fn passed_fields(&self) -> &[String] {
        &self.passed
    }

    /// Primer mensaje específico de campo; si ningún campo fallido declara
    /// mensaje, el genérico.
    pub fn first_error_message(&self) -> Option<&str> {
        if self.errors.is_empty() {
            return None;
        }
        Some(self.errors
                 .iter()
                 .find(|e| e.specific)
                 .map(|e| e.message.as_str())
                 .unwrap_or(GENERIC_REQUIRED_MESSAGE))
    }

    fn push_error(&mut self, field: &str, message: String, specific: bool) {
        self.errors.push(FieldError { field: field.to_string(),
                                      message,
                                      specific });
    }
}

/// Valida los campos requeridos de `step`. No modifica el formulario: el
/// marcado de errores lo decide el llamador.
pub fn validate_step(step: &StepDefinition, form: &dyn FormAdapter) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for field in step.required_fields() {
        let raw = form.field_value(&field.name);
        match field.check(raw.as_deref()) {
            Ok(()) => result.passed.push(field.name.clone()),
            Err(DomainError::ValidationError(message)) => {
                result.push_error(&field.name, message, field.error_message.is_some())
            }
            Err(other) => result.push_error(&field.name, other.to_string(), false),
        }
    }
    result
}
