// Archivo: controller.rs
// Propósito: `WizardController`, la máquina de estados del asistente del
// simulador. Estados: pasos 1..=total. Transiciones: `next_step` (validada),
// `prev_step` y `go_to_step` (libres) y `reset` (vuelve al paso 1). El
// último paso es el único al que se llega con efecto lateral (el envío).
use crate::collaborators::{FormAdapter, NotificationId, NotificationKind, SimulationClient, WizardView};
use crate::errors::{Result, WizardError};
use crate::scheduler::{TaskHandle, TaskScheduler};
use crate::state::WizardState;
use crate::submission::{LoadingGuard, PendingSubmission, SubmissionOutcome, SubmissionTicket};
use crate::validation::{validate_step, ValidationResult};
use log::{debug, info, warn};
use simulador_domain::{estimate_annual_consumption, field_hint, format_thousands, provincia, FormValues,
                       SimulationResponse, WizardDefinition, GENERIC_REQUIRED_MESSAGE};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Tiempo que un campo conserva la marca de error si el usuario no lo edita.
pub const FIELD_ERROR_TIMEOUT: Duration = Duration::from_secs(5);
/// Tiempo que una notificación permanece visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

pub const TRANSPORT_ERROR_MESSAGE: &str = "Error de conexión. Por favor, inténtalo de nuevo.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido en el cálculo";
pub const RESET_MESSAGE: &str = "Simulador reiniciado. Puedes comenzar una nueva simulación.";
pub const NORTH_ORIENTATION_MESSAGE: &str = "¡Excelente! La orientación Norte es óptima para Argentina.";
pub const ESTIMATE_INPUT_MISSING_MESSAGE: &str =
    "Por favor, selecciona el número de habitantes y tipo de vivienda.";

/// Tiempos de la interfaz transitoria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardConfig {
    pub field_error_timeout: Duration,
    pub notification_ttl: Duration,
}

impl Default for WizardConfig {
    fn default() -> Self {
        WizardConfig { field_error_timeout: FIELD_ERROR_TIMEOUT,
                       notification_ttl: NOTIFICATION_TTL }
    }
}

/// Resultado de `next_step`.
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// La validación falló; el paso no cambió.
    Blocked(ValidationResult),
    /// Avanzó al paso indicado.
    Advanced(usize),
    /// Avanzó al paso de resultados y se resolvió el envío.
    Submitted(SubmissionOutcome),
    /// Ya estaba en el último paso.
    AtLastStep,
}

/// Controlador del asistente.
///
/// Se construye una vez por página con sus colaboradores y se llama desde
/// los manejadores de eventos. Todo el estado mutable vive aquí; los
/// colaboradores sólo reciben órdenes.
pub struct WizardController {
    definition: WizardDefinition,
    state: WizardState,
    config: WizardConfig,
    form: Arc<dyn FormAdapter>,
    view: Arc<dyn WizardView>,
    client: Arc<dyn SimulationClient>,
    scheduler: TaskScheduler,
    /// Limpiezas de error pendientes por campo.
    error_timers: HashMap<String, TaskHandle>,
    /// Cambia en cada `reset`; las respuestas de otra generación se ignoran.
    generation: Uuid,
    in_flight: Arc<AtomicBool>,
    next_notification: u64,
}

impl WizardController {
    pub fn new(definition: WizardDefinition,
               form: Arc<dyn FormAdapter>,
               view: Arc<dyn WizardView>,
               client: Arc<dyn SimulationClient>)
               -> Self {
        Self::with_config(definition, WizardConfig::default(), form, view, client)
    }

    pub fn with_config(definition: WizardDefinition,
                       config: WizardConfig,
                       form: Arc<dyn FormAdapter>,
                       view: Arc<dyn WizardView>,
                       client: Arc<dyn SimulationClient>)
                       -> Self {
        let state = WizardState::new(definition.total_steps());
        Self { definition,
               state,
               config,
               form,
               view,
               client,
               scheduler: TaskScheduler::new(),
               error_timers: HashMap::new(),
               generation: Uuid::new_v4(),
               in_flight: Arc::new(AtomicBool::new(false)),
               next_notification: 0 }
    }

    /// Coloca el asistente en el paso 1, aplica las selecciones por defecto
    /// que el usuario aún no haya tocado y dibuja el paso.
    pub fn initialize(&mut self) {
        self.state.reset();
        self.apply_defaults();
        self.render();
        debug!("asistente inicializado con {} pasos", self.state.total_steps());
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    pub fn total_steps(&self) -> usize {
        self.state.total_steps()
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Salto directo (indicador de pasos). Fuera de rango no hace nada.
    pub fn go_to_step(&mut self, step: usize) -> bool {
        if !self.state.go_to(step) {
            debug!("go_to_step({}) ignorado: fuera de 1..={}", step, self.state.total_steps());
            return false;
        }
        self.render();
        true
    }

    /// Avanza si el paso actual es válido. Al llegar al paso de resultados
    /// lanza el envío.
    pub async fn next_step(&mut self) -> NextOutcome {
        let validation = self.validate_current_step();
        if !validation.is_valid() {
            let message = validation.first_error_message().unwrap_or(GENERIC_REQUIRED_MESSAGE).to_string();
            self.notify(&message, NotificationKind::Error);
            return NextOutcome::Blocked(validation);
        }
        if !self.state.advance() {
            return NextOutcome::AtLastStep;
        }
        self.render();
        let step = self.state.current_step();
        debug!("avance al paso {}", step);
        if !self.state.is_final() {
            return NextOutcome::Advanced(step);
        }
        match self.submit().await {
            Ok(outcome) => NextOutcome::Submitted(outcome),
            Err(e) => {
                warn!("envío omitido al llegar a resultados: {}", e);
                NextOutcome::Advanced(step)
            }
        }
    }

    /// Retrocede un paso, sin validar.
    pub fn prev_step(&mut self) -> bool {
        if !self.state.retreat() {
            return false;
        }
        self.render();
        true
    }

    /// Valida los campos requeridos del paso actual. Marca los que fallan
    /// (la marca se retira sola tras `field_error_timeout` o al editar el
    /// campo) y limpia los que pasan.
    pub fn validate_current_step(&mut self) -> ValidationResult {
        let result = match self.definition.step(self.state.current_step()) {
            Some(step) => validate_step(step, self.form.as_ref()),
            None => ValidationResult::valid(),
        };
        for name in result.passed_fields() {
            self.cancel_error_timer(name);
            self.form.clear_field_error(name);
        }
        for err in result.errors() {
            self.form.set_field_error(&err.field, &err.message);
            self.schedule_error_clear(&err.field);
        }
        result
    }

    /// Lee todos los campos de la variante. Los ausentes toman el default
    /// del campo o el cero de su tipo.
    pub fn collect_form_data(&self) -> FormValues {
        self.definition
            .fields()
            .map(|f| (f.name.clone(), f.coerce(self.form.field_value(&f.name).as_deref())))
            .collect()
    }

    /// Envía el formulario y entrega el resultado a la vista.
    pub async fn submit(&mut self) -> Result<SubmissionOutcome> {
        let pending = self.begin_submission()?;
        let client = Arc::clone(&self.client);
        let response = client.simulate(pending.request()).await;
        Ok(self.complete_submission(pending, response))
    }

    /// Primera mitad de `submit`: reserva el envío, activa el estado de carga
    /// y recoge los valores. Falla con `SubmissionInFlight` si ya hay uno.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission> {
        let loading = LoadingGuard::acquire(Arc::clone(&self.view), Arc::clone(&self.in_flight))
            .ok_or(WizardError::SubmissionInFlight)?;
        let request = self.collect_form_data();
        let ticket = SubmissionTicket::new(self.generation);
        info!("simulación {} enviada con {} campos", ticket.id, request.len());
        Ok(PendingSubmission::new(ticket, request, loading))
    }

    /// Segunda mitad de `submit`: clasifica la respuesta, la muestra en el
    /// paso de resultados y libera el estado de carga.
    pub fn complete_submission(&mut self,
                               pending: PendingSubmission,
                               response: Result<SimulationResponse>)
                               -> SubmissionOutcome {
        let ticket = *pending.ticket();
        if ticket.generation != self.generation {
            warn!("respuesta de la simulación {} descartada: el asistente se reinició", ticket.id);
            return SubmissionOutcome::Stale;
        }
        let outcome = match response {
            Ok(SimulationResponse { success: true,
                                    resultados: Some(resultados),
                                    .. }) => {
                self.view.render_results(&resultados);
                SubmissionOutcome::Rendered
            }
            Ok(resp) => {
                let message = resp.error
                                  .filter(|m| !m.trim().is_empty())
                                  .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
                self.view.render_error(&message);
                SubmissionOutcome::Failed(message)
            }
            Err(WizardError::Logic(message)) => {
                self.view.render_error(&message);
                SubmissionOutcome::Failed(message)
            }
            Err(e) => {
                warn!("simulación {} fallida: {}", ticket.id, e);
                self.view.render_error(TRANSPORT_ERROR_MESSAGE);
                SubmissionOutcome::Failed(TRANSPORT_ERROR_MESSAGE.to_string())
            }
        };
        // El panel de error vive en el paso de resultados.
        self.state.go_to(self.definition.results_step());
        self.render();
        info!("simulación {} resuelta en {} ms: {:?}", ticket.id, ticket.elapsed_ms(), outcome);
        drop(pending);
        outcome
    }

    /// Vuelve al paso 1 con el formulario en sus valores por defecto.
    pub fn reset(&mut self) {
        self.generation = Uuid::new_v4();
        for (_, timer) in self.error_timers.drain() {
            timer.cancel();
        }
        self.state.reset();
        self.form.reset();
        self.apply_defaults();
        self.view.hide_result_panels();
        self.render();
        self.notify(RESET_MESSAGE, NotificationKind::Success);
    }

    /// Llamar cuando el usuario modifica un campo: retira su marca de error
    /// y da la respuesta inmediata que corresponda al campo.
    pub fn on_field_edited(&mut self, name: &str) {
        self.cancel_error_timer(name);
        self.form.clear_field_error(name);
        let value = self.form.field_value(name);
        match name {
            "ubicacion" => {
                let prov = value.as_deref().and_then(provincia);
                self.view.show_location(prov);
                if let Some(p) = prov {
                    self.notify(&format!("Ubicación actualizada: {}", p.name), NotificationKind::Info);
                }
            }
            "orientacion" if value.as_deref() == Some("N") => {
                self.notify(NORTH_ORIENTATION_MESSAGE, NotificationKind::Success);
            }
            _ => {
                if let Some(hint) = value.as_deref().and_then(|v| field_hint(name, v)) {
                    self.view.show_field_hint(name, &hint);
                }
            }
        }
    }

    /// Rellena `consumo_anual` a partir de `habitantes` y `tipo_vivienda`.
    pub fn estimate_consumption(&mut self) -> Option<u32> {
        let read = |name: &str| self.form.field_value(name).filter(|v| !v.trim().is_empty());
        let (Some(habitantes), Some(tipo)) = (read("habitantes"), read("tipo_vivienda")) else {
            self.notify(ESTIMATE_INPUT_MISSING_MESSAGE, NotificationKind::Error);
            return None;
        };
        let kwh = estimate_annual_consumption(&tipo, &habitantes);
        self.form.set_field_value("consumo_anual", Some(kwh.to_string()));
        self.notify(&format!("Consumo estimado calculado: {} kWh/año", format_thousands(u64::from(kwh))),
                    NotificationKind::Success);
        Some(kwh)
    }

    /// Muestra una notificación y programa su retirada.
    pub fn notify(&mut self, message: &str, kind: NotificationKind) -> NotificationId {
        self.next_notification += 1;
        let id = NotificationId(self.next_notification);
        self.view.show_notification(id, message, kind);
        let view = Arc::clone(&self.view);
        // La retirada no se sigue individualmente; `shutdown` la cancela.
        let _ = self.scheduler.schedule(self.config.notification_ttl, move || view.dismiss_notification(id));
        id
    }

    /// Cancela toda tarea diferida. Usar cuando la vista se desmonta.
    pub fn shutdown(&mut self) {
        self.error_timers.clear();
        self.scheduler.cancel_all();
    }

    fn render(&self) {
        let current = self.state.current_step();
        self.view.show_step(current);
        self.view.update_step_indicator(current, self.state.total_steps());
        self.view.update_navigation(self.state.navigation());
    }

    fn apply_defaults(&self) {
        for field in self.definition.fields() {
            if let Some(default) = &field.default {
                if self.form.field_value(&field.name).is_none() {
                    self.form.set_field_value(&field.name, Some(default.to_form_text()));
                }
            }
        }
    }

    fn schedule_error_clear(&mut self, name: &str) {
        self.cancel_error_timer(name);
        let form = Arc::clone(&self.form);
        let field = name.to_string();
        let handle = self.scheduler.schedule(self.config.field_error_timeout, move || form.clear_field_error(&field));
        self.error_timers.insert(name.to_string(), handle);
    }

    fn cancel_error_timer(&mut self, name: &str) {
        if let Some(timer) = self.error_timers.remove(name) {
            timer.cancel();
        }
    }
}
