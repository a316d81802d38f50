mod common;

use common::fixture;
use simulador_domain::{HintLevel, WizardVariant};
use wizard::stubs::ViewEvent;
use wizard::{FormAdapter, NotificationKind, ESTIMATE_INPUT_MISSING_MESSAGE, NORTH_ORIENTATION_MESSAGE};

#[test]
fn numeric_fields_get_live_hints() {
  let mut f = fixture(WizardVariant::Basico);
  f.form.set("consumo_anual", "300");
  f.ctl.on_field_edited("consumo_anual");
  f.form.set("superficie", "50");
  f.ctl.on_field_edited("superficie");
  let hints: Vec<_> = f.view
                       .events()
                       .into_iter()
                       .filter_map(|e| match e {
                         ViewEvent::Hint { field, hint } => Some((field, hint)),
                         _ => None,
                       })
                       .collect();
  assert_eq!(hints.len(), 2);
  assert_eq!(hints[0].0, "consumo_anual");
  assert_eq!(hints[0].1.level, HintLevel::Warning);
  assert!(hints[1].1.text.contains("~25 paneles"));
}

#[test]
fn province_change_moves_map_and_notifies() {
  let mut f = fixture(WizardVariant::Basico);
  f.form.set("ubicacion", "cordoba");
  f.ctl.on_field_edited("ubicacion");
  assert!(f.view.events().contains(&ViewEvent::Location(Some("cordoba".to_string()))));
  let notes = f.view.notifications();
  assert_eq!(notes[0].1, "Ubicación actualizada: Córdoba");
  assert_eq!(notes[0].2, NotificationKind::Info);

  f.form.set("ubicacion", "");
  f.ctl.on_field_edited("ubicacion");
  assert_eq!(f.view.events().last(), Some(&ViewEvent::Location(None)));
  assert_eq!(f.view.notifications().len(), 1);
}

#[test]
fn north_orientation_is_praised() {
  let mut f = fixture(WizardVariant::Basico);
  f.form.set("orientacion", "S");
  f.ctl.on_field_edited("orientacion");
  assert!(f.view.notifications().is_empty());
  f.form.set("orientacion", "N");
  f.ctl.on_field_edited("orientacion");
  let notes = f.view.notifications();
  assert_eq!(notes.len(), 1);
  assert_eq!(notes[0].1, NORTH_ORIENTATION_MESSAGE);
  assert_eq!(notes[0].2, NotificationKind::Success);
}

#[test]
fn editing_a_field_clears_its_error_mark() {
  let mut f = fixture(WizardVariant::Basico);
  f.ctl.validate_current_step();
  assert!(f.form.has_error("ubicacion"));
  f.form.set("ubicacion", "salta");
  f.ctl.on_field_edited("ubicacion");
  assert!(!f.form.has_error("ubicacion"));
  assert!(f.form.has_error("consumo_anual"));
}

#[test]
fn consumption_estimate_requires_both_inputs() {
  let mut f = fixture(WizardVariant::Basico);
  f.form.set("habitantes", "3");
  assert_eq!(f.ctl.estimate_consumption(), None);
  let notes = f.view.notifications();
  assert_eq!(notes[0].1, ESTIMATE_INPUT_MISSING_MESSAGE);
  assert_eq!(notes[0].2, NotificationKind::Error);
  assert_eq!(f.form.field_value("consumo_anual"), None);
}

#[test]
fn consumption_estimate_fills_the_field() {
  let mut f = fixture(WizardVariant::Basico);
  f.form.set("habitantes", "4");
  f.form.set("tipo_vivienda", "casa");
  assert_eq!(f.ctl.estimate_consumption(), Some(4500));
  assert_eq!(f.form.field_value("consumo_anual").as_deref(), Some("4500"));
  let notes = f.view.notifications();
  assert_eq!(notes[0].1, "Consumo estimado calculado: 4.500 kWh/año");
  assert_eq!(notes[0].2, NotificationKind::Success);
}
