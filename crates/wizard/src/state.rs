// Archivo: state.rs
// Propósito: estado de navegación del asistente (paso actual) y los
// derivados que la vista necesita (marcas del indicador y botones).
use serde::{Deserialize, Serialize};

/// Estado del asistente. Invariante: `1 <= current_step <= total_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: usize,
    total_steps: usize,
}

/// Marca de un paso en el indicador de progreso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMark {
    Completed,
    Active,
    Pending,
}

/// Estado del botón "siguiente".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextButton {
    Next,
    /// Penúltimo paso: el siguiente avance dispara el cálculo.
    Calculate,
    Hidden,
}

impl NextButton {
    pub fn label(self) -> Option<&'static str> {
        match self {
            NextButton::Next => Some("Siguiente →"),
            NextButton::Calculate => Some("Calcular →"),
            NextButton::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub show_prev: bool,
    pub next: NextButton,
}

impl WizardState {
    /// Crea el estado en el paso 1. `total_steps` se ajusta a un mínimo de 1.
    pub fn new(total_steps: usize) -> Self {
        Self { current_step: 1,
               total_steps: total_steps.max(1) }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_final(&self) -> bool {
        self.current_step == self.total_steps
    }

    pub fn contains(&self, step: usize) -> bool {
        (1..=self.total_steps).contains(&step)
    }

    /// Mueve al paso `step`. Devuelve `false` (sin cambios) si está fuera de
    /// rango.
    pub fn go_to(&mut self, step: usize) -> bool {
        if !self.contains(step) {
            return false;
        }
        self.current_step = step;
        true
    }

    /// Avanza un paso si no está en el último.
    pub fn advance(&mut self) -> bool {
        self.go_to(self.current_step + 1)
    }

    /// Retrocede un paso si no está en el primero.
    pub fn retreat(&mut self) -> bool {
        self.current_step > 1 && self.go_to(self.current_step - 1)
    }

    pub fn reset(&mut self) {
        self.current_step = 1;
    }

    /// Marcas del indicador: anteriores completados, actual activo, resto
    /// pendiente.
    pub fn step_marks(&self) -> Vec<StepMark> {
        (1..=self.total_steps).map(|n| {
                                  if n < self.current_step {
                                      StepMark::Completed
                                  } else if n == self.current_step {
                                      StepMark::Active
                                  } else {
                                      StepMark::Pending
                                  }
                              })
                              .collect()
    }

    pub fn navigation(&self) -> NavigationState {
        let next = if self.current_step == self.total_steps {
            NextButton::Hidden
        } else if self.current_step + 1 == self.total_steps {
            NextButton::Calculate
        } else {
            NextButton::Next
        };
        NavigationState { show_prev: self.current_step > 1,
                          next }
    }
}
