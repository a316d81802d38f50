mod common;

use common::fixture;
use simulador_domain::WizardVariant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use wizard::{NotificationKind, TaskScheduler};

#[tokio::test(start_paused = true)]
async fn field_error_clears_after_timeout() {
  let mut f = fixture(WizardVariant::Basico);
  f.ctl.initialize();
  let v = f.ctl.validate_current_step();
  assert!(!v.is_valid());
  assert!(f.form.has_error("consumo_anual"));
  sleep(Duration::from_secs(4)).await;
  assert!(f.form.has_error("consumo_anual"));
  sleep(Duration::from_secs(2)).await;
  assert!(!f.form.has_error("consumo_anual"));
  assert!(!f.form.has_error("ubicacion"));
}

#[tokio::test(start_paused = true)]
async fn editing_clears_error_and_cancels_old_timer() {
  let mut f = fixture(WizardVariant::Basico);
  f.ctl.initialize();
  f.ctl.validate_current_step();
  sleep(Duration::from_secs(3)).await;
  f.form.set("consumo_anual", "4000");
  f.ctl.on_field_edited("consumo_anual");
  assert!(!f.form.has_error("consumo_anual"));

  // nuevo fallo a t=3s: la marca debe durar hasta t=8s, no hasta t=5s
  f.form.set("consumo_anual", "0");
  f.ctl.validate_current_step();
  sleep(Duration::from_secs(3)).await;
  assert!(f.form.has_error("consumo_anual"));
  sleep(Duration::from_millis(2500)).await;
  assert!(!f.form.has_error("consumo_anual"));
}

#[tokio::test(start_paused = true)]
async fn notifications_are_dismissed_after_ttl() {
  let mut f = fixture(WizardVariant::Basico);
  let id = f.ctl.notify("hola", NotificationKind::Info);
  sleep(Duration::from_secs(3)).await;
  assert!(f.view.dismissed().is_empty());
  sleep(Duration::from_secs(2)).await;
  assert_eq!(f.view.dismissed(), vec![id]);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_writes() {
  let mut f = fixture(WizardVariant::Basico);
  f.ctl.initialize();
  f.ctl.validate_current_step();
  f.ctl.notify("adiós", NotificationKind::Info);
  f.ctl.shutdown();
  sleep(Duration::from_secs(10)).await;
  assert!(f.form.has_error("consumo_anual"));
  assert!(f.view.dismissed().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancelled_task_never_runs() {
  let scheduler = TaskScheduler::new();
  let ran = Arc::new(AtomicBool::new(false));
  let flag = ran.clone();
  let handle = scheduler.schedule(Duration::from_secs(1), move || flag.store(true, Ordering::SeqCst));
  assert!(!handle.is_detached());
  handle.cancel();
  handle.cancel();
  sleep(Duration::from_secs(2)).await;
  assert!(!ran.load(Ordering::SeqCst));
  assert_eq!(scheduler.pending(), 0);
}

#[test]
fn scheduling_outside_runtime_is_detached() {
  let scheduler = TaskScheduler::new();
  let handle = scheduler.schedule(Duration::from_millis(10), || {});
  assert!(handle.is_detached());
  handle.cancel();
  assert_eq!(scheduler.pending(), 0);
}
