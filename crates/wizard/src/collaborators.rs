// Archivo: collaborators.rs
// Propósito: contratos que el controlador consume. La vista y el formulario
// los implementa la capa de presentación (DOM, consola, tests); el cliente
// de simulación lo implementa `simulador-client`.
use crate::errors::Result;
use crate::state::NavigationState;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use simulador_domain::{FieldHint, FormValues, Provincia, SimulationResponse, SimulationResult};
use std::fmt;

/// Acceso mínimo a los controles del formulario.
pub trait FormAdapter: Send + Sync {
    /// Valor actual del campo. `None` si el campo no existe o si es un grupo
    /// de radio sin opción marcada.
    fn field_value(&self, name: &str) -> Option<String>;

    /// Escribe (o borra con `None`) el valor de un campo. Para grupos de
    /// radio equivale a marcar la opción con ese valor.
    fn set_field_value(&self, name: &str, value: Option<String>);

    /// Marca el campo con estilo de error.
    fn set_field_error(&self, name: &str, message: &str);

    fn clear_field_error(&self, name: &str);

    /// Vacía todos los campos y quita todas las marcas de error.
    fn reset(&self);
}

/// Tipo visual de una notificación transitoria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Identificador de una notificación mostrada, usado para retirarla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

/// Colaborador de renderizado.
///
/// Los métodos con implementación por defecto son ganchos opcionales; una
/// vista mínima sólo implementa el resto.
pub trait WizardView: Send + Sync {
    /// Muestra el paso `step` y oculta los demás.
    fn show_step(&self, step: usize);

    fn update_step_indicator(&self, current_step: usize, total_steps: usize);

    fn update_navigation(&self, _navigation: NavigationState) {}

    fn render_results(&self, result: &SimulationResult);

    fn render_error(&self, message: &str);

    /// Oculta los paneles de resultados y de error.
    fn hide_result_panels(&self) {}

    fn show_notification(&self, id: NotificationId, message: &str, kind: NotificationKind);

    fn dismiss_notification(&self, _id: NotificationId) {}

    fn set_submit_loading(&self, loading: bool);

    fn show_field_hint(&self, _field: &str, _hint: &FieldHint) {}

    /// Centra el mapa en la provincia elegida, o lo oculta con `None`.
    fn show_location(&self, _provincia: Option<&Provincia>) {}
}

/// Cliente del endpoint de simulación.
///
/// Los fallos de red, los estados no 2xx y los cuerpos ilegibles se
/// devuelven como `WizardError::Transport`. Una respuesta decodificada se
/// devuelve tal cual, aunque traiga `success: false`.
#[async_trait]
pub trait SimulationClient: Send + Sync {
    async fn simulate(&self, values: &FormValues) -> Result<SimulationResponse>;
}
