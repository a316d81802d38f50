//! simulador-domain: tipos del asistente del simulador solar
//!
//! Define los descriptores de campos y pasos, las variantes de página, los
//! valores del formulario y los cuerpos intercambiados con el endpoint de
//! simulación. Incluye además los catálogos de apoyo de la página
//! (consumo estimado, provincias y textos de ayuda).
mod consumption;
mod errors;
mod field;
mod form_values;
mod format;
mod hints;
mod location;
mod simulation;
mod step_definition;
mod variant;

pub use consumption::{estimate_annual_consumption, FALLBACK_CONSUMPTION_KWH};
pub use errors::DomainError;
pub use field::{parse_number, FieldDescriptor, FieldKind, FieldValue, ValueType, GENERIC_REQUIRED_MESSAGE};
pub use form_values::FormValues;
pub use format::format_thousands;
pub use hints::{field_hint, FieldHint, HintLevel, PANEL_AREA_M2};
pub use location::{provincia, provincia_codes, Provincia};
pub use simulation::{DatoAnual, SimulationResponse, SimulationResult};
pub use step_definition::{StepDefinition, WizardDefinition};
pub use variant::WizardVariant;
