// Archivo: stubs.rs
// Propósito: implementaciones en memoria de los colaboradores para pruebas
// y para front-ends sin DOM (la consola). No hay durabilidad.
use crate::collaborators::{FormAdapter, NotificationId, NotificationKind, SimulationClient, WizardView};
use crate::errors::{Result, WizardError};
use crate::state::NavigationState;
use async_trait::async_trait;
use simulador_domain::{FieldHint, FormValues, Provincia, SimulationResponse, SimulationResult};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

/// Formulario en memoria: un mapa nombre -> valor y otro nombre -> error.
#[derive(Debug, Default)]
pub struct InMemoryForm {
    values: Mutex<BTreeMap<String, String>>,
    errors: Mutex<BTreeMap<String, String>>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formulario con valores iniciales.
    pub fn with_values(values: &[(&str, &str)]) -> Self {
        let form = Self::new();
        for (k, v) in values {
            form.set(k, v);
        }
        form
    }

    /// Atajo de `set_field_value(name, Some(value))`, como si el usuario
    /// escribiera.
    pub fn set(&self, name: &str, value: &str) {
        self.set_field_value(name, Some(value.to_string()));
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).get(name).cloned()
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.error(name).is_some()
    }

    /// Campos marcados con error, ordenados por nombre.
    pub fn fields_with_error(&self) -> Vec<String> {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).keys().cloned().collect()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl FormAdapter for InMemoryForm {
    fn field_value(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap_or_else(|e| e.into_inner()).get(name).cloned()
    }

    fn set_field_value(&self, name: &str, value: Option<String>) {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        match value {
            Some(v) => {
                values.insert(name.to_string(), v);
            }
            None => {
                values.remove(name);
            }
        }
    }

    fn set_field_error(&self, name: &str, message: &str) {
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.to_string(), message.to_string());
    }

    fn clear_field_error(&self, name: &str) {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).remove(name);
    }

    fn reset(&self) {
        self.values.lock().unwrap_or_else(|e| e.into_inner()).clear();
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// Llamada registrada por `RecordingView`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ShowStep(usize),
    StepIndicator { current: usize, total: usize },
    Navigation(NavigationState),
    Results(SimulationResult),
    Error(String),
    HidePanels,
    Notification { id: NotificationId, message: String, kind: NotificationKind },
    Dismiss(NotificationId),
    Loading(bool),
    Hint { field: String, hint: FieldHint },
    Location(Option<String>),
}

/// Vista que registra cada llamada, para inspección en pruebas.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).push(event);
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn rendered_results(&self) -> Vec<SimulationResult> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Results(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn rendered_errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Valores pasados a `set_submit_loading`, en orden.
    pub fn loading_calls(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Loading(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    pub fn notifications(&self) -> Vec<(NotificationId, String, NotificationKind)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notification { id, message, kind } => Some((id, message, kind)),
                _ => None,
            })
            .collect()
    }

    pub fn dismissed(&self) -> Vec<NotificationId> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Dismiss(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    /// Último paso mostrado.
    pub fn visible_step(&self) -> Option<usize> {
        self.events().into_iter().rev().find_map(|e| match e {
                                            ViewEvent::ShowStep(n) => Some(n),
                                            _ => None,
                                        })
    }
}

impl WizardView for RecordingView {
    fn show_step(&self, step: usize) {
        self.push(ViewEvent::ShowStep(step));
    }

    fn update_step_indicator(&self, current_step: usize, total_steps: usize) {
        self.push(ViewEvent::StepIndicator { current: current_step,
                                             total: total_steps });
    }

    fn update_navigation(&self, navigation: NavigationState) {
        self.push(ViewEvent::Navigation(navigation));
    }

    fn render_results(&self, result: &SimulationResult) {
        self.push(ViewEvent::Results(result.clone()));
    }

    fn render_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }

    fn hide_result_panels(&self) {
        self.push(ViewEvent::HidePanels);
    }

    fn show_notification(&self, id: NotificationId, message: &str, kind: NotificationKind) {
        self.push(ViewEvent::Notification { id,
                                            message: message.to_string(),
                                            kind });
    }

    fn dismiss_notification(&self, id: NotificationId) {
        self.push(ViewEvent::Dismiss(id));
    }

    fn set_submit_loading(&self, loading: bool) {
        self.push(ViewEvent::Loading(loading));
    }

    fn show_field_hint(&self, field: &str, hint: &FieldHint) {
        self.push(ViewEvent::Hint { field: field.to_string(),
                                    hint: hint.clone() });
    }

    fn show_location(&self, provincia: Option<&Provincia>) {
        self.push(ViewEvent::Location(provincia.map(|p| p.code.to_string())));
    }
}

/// Cliente de simulación con respuestas programadas en cola.
///
/// Sin respuestas en cola devuelve un error de transporte.
#[derive(Debug, Default)]
pub struct ScriptedSimulationClient {
    replies: Mutex<VecDeque<std::result::Result<SimulationResponse, String>>>,
    requests: Mutex<Vec<FormValues>>,
}

impl ScriptedSimulationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, response: SimulationResponse) -> &Self {
        self.replies.lock().unwrap_or_else(|e| e.into_inner()).push_back(Ok(response));
        self
    }

    pub fn fail_with_transport(&self, message: &str) -> &Self {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Err(message.to_string()));
        self
    }

    /// Cuerpos recibidos, en orden.
    pub fn requests(&self) -> Vec<FormValues> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl SimulationClient for ScriptedSimulationClient {
    async fn simulate(&self, values: &FormValues) -> Result<SimulationResponse> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).push(values.clone());
        let reply = self.replies.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
        match reply {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(message)) => Err(WizardError::Transport(message)),
            None => Err(WizardError::Transport("sin respuesta programada".to_string())),
        }
    }
}
