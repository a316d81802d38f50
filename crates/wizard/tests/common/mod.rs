#![allow(dead_code)]
use simulador_domain::{DatoAnual, SimulationResult, WizardVariant};
use std::sync::Arc;
use wizard::stubs::{InMemoryForm, RecordingView, ScriptedSimulationClient};
use wizard::WizardController;

pub struct Fixture {
  pub form: Arc<InMemoryForm>,
  pub view: Arc<RecordingView>,
  pub client: Arc<ScriptedSimulationClient>,
  pub ctl: WizardController,
}

pub fn fixture(variant: WizardVariant) -> Fixture {
  let form = Arc::new(InMemoryForm::new());
  let view = Arc::new(RecordingView::new());
  let client = Arc::new(ScriptedSimulationClient::new());
  let ctl = WizardController::new(variant.definition(), form.clone(), view.clone(), client.clone());
  Fixture { form, view, client, ctl }
}

pub fn sample_result() -> SimulationResult {
  SimulationResult { potencia_instalada: Some(3.3),
                     num_paneles: Some(6),
                     produccion_anual: Some(5200.0),
                     ahorro_total_anual: Some(640.5),
                     autoconsumo_porcentaje: Some(65.0),
                     periodo_retorno: Some(7.2),
                     costo_instalacion: Some(4600.0),
                     superficie_necesaria: Some(12.0),
                     ahorro_25_anos: Some(16012.5),
                     incluye_bateria: false,
                     datos_anuales: vec![DatoAnual { ano: Some(1), ahorro_acumulado: Some(640.5) },
                                         DatoAnual { ano: Some(2), ahorro_acumulado: Some(1281.0) }],
                     extra: serde_json::Map::new() }
}

/// Rellena los campos del paso 1 de cualquier variante.
pub fn fill_consumo(form: &InMemoryForm) {
  form.set("consumo_anual", "3500");
  form.set("ubicacion", "cordoba");
}
