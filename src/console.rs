// Archivo: console.rs
// Propósito: `WizardView` de consola. Imprime cada orden del controlador en
// stdout; el formulario vive en un `InMemoryForm` compartido.
use simulador_domain::{format_thousands, FieldHint, HintLevel, Provincia, SimulationResult, WizardDefinition};
use std::sync::Arc;
use wizard::stubs::InMemoryForm;
use wizard::{FormAdapter, NavigationState, NotificationId, NotificationKind, WizardView};

pub struct ConsoleView {
    definition: WizardDefinition,
    form: Arc<InMemoryForm>,
}

impl ConsoleView {
    pub fn new(definition: WizardDefinition, form: Arc<InMemoryForm>) -> Self {
        Self { definition, form }
    }
}

impl WizardView for ConsoleView {
    fn show_step(&self, step: usize) {
        let Some(def) = self.definition.step(step) else {
            return;
        };
        println!("\n== Paso {}: {} ==", def.number, def.title);
        for field in &def.fields {
            let value = self.form.field_value(&field.name).unwrap_or_else(|| "-".into());
            let label = if field.label.is_empty() { field.name.as_str() } else { field.label.as_str() };
            let marker = if field.required { "*" } else { " " };
            let error = self.form.error(&field.name).map(|e| format!("  ✗ {}", e)).unwrap_or_default();
            println!("{} {:<16} {:<28} = {}{}", marker, field.name, label, value, error);
        }
    }

    fn update_step_indicator(&self, current_step: usize, total_steps: usize) {
        let marks: Vec<String> = (1..=total_steps).map(|n| {
                                                      if n < current_step {
                                                          "✓".to_string()
                                                      } else if n == current_step {
                                                          format!("[{}]", n)
                                                      } else {
                                                          n.to_string()
                                                      }
                                                  })
                                                  .collect();
        println!("Progreso: {}", marks.join(" - "));
    }

    fn update_navigation(&self, navigation: NavigationState) {
        let prev = if navigation.show_prev { "← Anterior" } else { "" };
        let next = navigation.next.label().unwrap_or("");
        if !prev.is_empty() || !next.is_empty() {
            println!("[{}] [{}]", prev, next);
        }
    }

    fn render_results(&self, r: &SimulationResult) {
        println!("\n== Resultados de la simulación ==");
        println!("Potencia instalada:     {} kWp ({} paneles)",
                 decimal(r.potencia_instalada, 2),
                 r.num_paneles.map(|n| n.to_string()).unwrap_or_else(|| "-".into()));
        println!("Producción anual:       {} kWh", thousands(r.produccion_anual));
        println!("Ahorro anual:           ${}", thousands(r.ahorro_total_anual));
        println!("Autoconsumo:            {}%", decimal(r.autoconsumo_porcentaje, 0));
        println!("Retorno de la inversión: {} años", decimal(r.periodo_retorno, 1));
        println!("Costo de instalación:   ${}", thousands(r.costo_instalacion));
        println!("Superficie necesaria:   {} m²", decimal(r.superficie_necesaria, 0));
        println!("Ahorro en 25 años:      ${}", thousands(r.ahorro_25_anos));
        if r.incluye_bateria {
            println!("Incluye batería de almacenamiento");
        }
        for dato in &r.datos_anuales {
            if let Some(ano) = dato.ano.filter(|a| a % 5 == 0) {
                println!("  año {:>2}: ${}", ano, thousands(dato.ahorro_acumulado));
            }
        }
    }

    fn render_error(&self, message: &str) {
        println!("\n✗ Error en el cálculo: {}", message);
    }

    fn hide_result_panels(&self) {
        println!("(resultados ocultos)");
    }

    fn show_notification(&self, _id: NotificationId, message: &str, kind: NotificationKind) {
        println!("[{}] {}", kind, message);
    }

    fn set_submit_loading(&self, loading: bool) {
        if loading {
            println!("Calculando...");
        }
    }

    fn show_field_hint(&self, field: &str, hint: &FieldHint) {
        let tag = match hint.level {
            HintLevel::Normal => "i",
            HintLevel::Warning => "!",
        };
        println!("({}) {}: {}", tag, field, hint.text);
    }

    fn show_location(&self, provincia: Option<&Provincia>) {
        if let Some(p) = provincia {
            println!("Mapa: {} ({:.4}, {:.4})", p.name, p.lat, p.lng);
        }
    }
}

/// `-` para los valores que el servidor no envió.
fn decimal(value: Option<f64>, digits: usize) -> String {
    value.map(|v| format!("{:.*}", digits, v)).unwrap_or_else(|| "-".into())
}

fn thousands(value: Option<f64>) -> String {
    value.map(|v| format_thousands(v.round().max(0.0) as u64)).unwrap_or_else(|| "-".into())
}
