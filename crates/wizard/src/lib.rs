//! Crate `wizard`: máquina de estados del asistente del simulador solar
//!
//! Este crate define el controlador `WizardController`, los contratos de sus
//! colaboradores (`FormAdapter`, `WizardView`, `SimulationClient`), la
//! validación por paso, un programador de tareas diferidas cancelables y
//! colaboradores en memoria útiles para pruebas (`stubs`).
//!
//! Diseño resumido:
//! - Un único hilo lógico: el controlador se usa con `&mut self` desde los
//!   manejadores de eventos y sólo se suspende durante el envío.
//! - Un envío a la vez: el estado de carga es un guard que se libera al
//!   resolver o descartar el envío.
//! - Las respuestas que llegan después de un `reset` se ignoran.
//!
//! Ejemplo rápido:
//! ```rust
//! use std::sync::Arc;
//! use simulador_domain::WizardVariant;
//! use wizard::stubs::{InMemoryForm, RecordingView, ScriptedSimulationClient};
//! use wizard::WizardController;
//!
//! let mut ctl = WizardController::new(WizardVariant::Basico.definition(),
//!                                     Arc::new(InMemoryForm::new()),
//!                                     Arc::new(RecordingView::new()),
//!                                     Arc::new(ScriptedSimulationClient::new()));
//! ctl.initialize();
//! assert_eq!(ctl.current_step(), 1);
//! ```
pub mod collaborators;
pub mod controller;
pub mod errors;
pub mod scheduler;
pub mod state;
pub mod stubs;
pub mod submission;
pub mod validation;

pub use collaborators::*;
pub use controller::*;
pub use errors::*;
pub use scheduler::{TaskHandle, TaskScheduler};
pub use state::*;
pub use submission::{PendingSubmission, SubmissionOutcome, SubmissionTicket};
pub use validation::{validate_step, FieldError, ValidationResult};
