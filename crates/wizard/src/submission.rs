// Archivo: submission.rs
// Propósito: tipos del envío al endpoint de simulación. El estado de carga
// de la vista lo gobierna `LoadingGuard`: se activa al crear el envío y se
// desactiva exactamente una vez al soltarlo, termine como termine.
use crate::collaborators::WizardView;
use chrono::{DateTime, Utc};
use simulador_domain::FormValues;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Identifica un envío y la generación del asistente en que se inició.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub id: Uuid,
    pub generation: Uuid,
    pub started_at: DateTime<Utc>,
}

impl SubmissionTicket {
    pub(crate) fn new(generation: Uuid) -> Self {
        Self { id: Uuid::new_v4(),
               generation,
               started_at: Utc::now() }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}

pub(crate) struct LoadingGuard {
    view: Arc<dyn WizardView>,
    in_flight: Arc<AtomicBool>,
}

impl LoadingGuard {
    /// Reserva el único envío permitido. `None` si ya hay uno en curso.
    pub(crate) fn acquire(view: Arc<dyn WizardView>, in_flight: Arc<AtomicBool>) -> Option<Self> {
        if in_flight.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
            return None;
        }
        view.set_submit_loading(true);
        Some(Self { view, in_flight })
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
        self.view.set_submit_loading(false);
    }
}

/// Envío iniciado y aún sin resolver.
///
/// Se obtiene con `WizardController::begin_submission` y se resuelve con
/// `WizardController::complete_submission`. Si se descarta sin resolver, el
/// estado de carga se limpia igualmente.
pub struct PendingSubmission {
    ticket: SubmissionTicket,
    request: FormValues,
    _loading: LoadingGuard,
}

impl PendingSubmission {
    pub(crate) fn new(ticket: SubmissionTicket, request: FormValues, loading: LoadingGuard) -> Self {
        Self { ticket,
               request,
               _loading: loading }
    }

    pub fn ticket(&self) -> &SubmissionTicket {
        &self.ticket
    }

    /// Cuerpo que se envía al endpoint.
    pub fn request(&self) -> &FormValues {
        &self.request
    }
}

impl fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSubmission")
         .field("ticket", &self.ticket)
         .field("request", &self.request)
         .finish_non_exhaustive()
    }
}

/// Cómo terminó un envío.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Resultados entregados a la vista.
    Rendered,
    /// Error mostrado al usuario (lógico o de transporte).
    Failed(String),
    /// La respuesta llegó tras un reinicio; se ignoró.
    Stale,
}
