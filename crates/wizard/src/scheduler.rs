// Archivo: scheduler.rs
// Propósito: tareas diferidas (limpieza de errores de campo, retirada de
// notificaciones) con handles de cancelación, para no escribir en vistas
// que ya no existen.
use log::warn;
use std::sync::Mutex;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::{AbortHandle, JoinHandle};

/// Handle de una tarea programada.
#[derive(Debug)]
pub struct TaskHandle(Option<AbortHandle>);

impl TaskHandle {
    /// Handle sin tarea asociada (no había runtime al programar).
    pub fn detached() -> Self {
        Self(None)
    }

    pub fn is_detached(&self) -> bool {
        self.0.is_none()
    }

    /// Cancela la tarea si aún no se ejecutó. Idempotente.
    pub fn cancel(&self) {
        if let Some(h) = &self.0 {
            h.abort();
        }
    }
}

/// Programador de tareas diferidas sobre el runtime tokio actual.
///
/// Al destruirse cancela todo lo pendiente.
#[derive(Debug, Default)]
pub struct TaskScheduler {
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self { tasks: Mutex::new(Vec::new()) }
    }

    /// Ejecuta `task` tras `delay`. Fuera de un runtime tokio la tarea no se
    /// programa y se devuelve un handle desacoplado.
    pub fn schedule<F>(&self, delay: Duration, task: F) -> TaskHandle
        where F: FnOnce() + Send + 'static
    {
        let runtime = match Handle::try_current() {
            Ok(h) => h,
            Err(_) => {
                warn!("sin runtime tokio: tarea diferida descartada ({:?})", delay);
                return TaskHandle::detached();
            }
        };
        let join = runtime.spawn(async move {
                              tokio::time::sleep(delay).await;
                              task();
                          });
        let abort = join.abort_handle();
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        tasks.retain(|t| !t.is_finished());
        tasks.push(join);
        TaskHandle(Some(abort))
    }

    /// Número de tareas programadas que aún no terminaron.
    pub fn pending(&self) -> usize {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        tasks.retain(|t| !t.is_finished());
        tasks.len()
    }

    pub fn cancel_all(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        for t in tasks.drain(..) {
            t.abort();
        }
    }
}

impl Drop for TaskScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
