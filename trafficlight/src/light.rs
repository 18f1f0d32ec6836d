// semaforo con hilo de ciclo propio.
// el hilo alterna la fase en un intervalo aleatorio y publica cada
// transicion por un canal bloqueante; wait_for_green consume ese canal.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use msgqueue::BlockingChannel;
use rand::Rng;
use thiserror::Error;

use crate::config::CycleConfig;
use crate::model::TrafficLightPhase;
use crate::tl_log;

/// Error de `wait_for_green` cuando el semáforo ya fue detenido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("el semaforo fue detenido")]
pub struct LightStopped;

/// Señal de parada que el hilo de ciclo observa en cada punto de
/// suspensión, para que stop() no tenga que esperar el sleep completo.
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopSignal {
    fn new() -> Self {
        Self {
            stopped: Mutex::new(false),
            wake: Condvar::new(),
        }
    }

    /// duerme hasta `timeout` o hasta que llegue la señal.
    /// devuelve true si hay que parar.
    fn wait_or_stop(&self, timeout: Duration) -> bool {
        let stopped = self.stopped.lock().unwrap();
        let (stopped, _) = self
            .wake
            .wait_timeout_while(stopped, timeout, |stop| !*stop)
            .unwrap();
        *stopped
    }

    fn raise(&self) {
        let mut stopped = self.stopped.lock().unwrap();
        *stopped = true;
        drop(stopped);
        self.wake.notify_all();
    }

    fn is_raised(&self) -> bool {
        *self.stopped.lock().unwrap()
    }
}

/// estado compartido entre la API publica y el hilo de ciclo
struct LightInner {
    /// fase actual como atomico: current_phase la lee sin tomar locks
    phase: AtomicU8,
    /// notificaciones de transicion; cada una la consume UN receptor
    updates: BlockingChannel<TrafficLightPhase>,
    stop: StopSignal,
    config: CycleConfig,
}

/// Semáforo concurrente de dos fases.
///
/// Arranca en rojo; `simulate` lanza el hilo de ciclo que alterna la
/// fase cada 4-6 unidades de tiempo (según config) y publica cada
/// transición. Cualquier cantidad de hilos puede bloquearse en
/// `wait_for_green` hasta la próxima transición a verde.
pub struct TrafficLight {
    inner: Arc<LightInner>,
    running: AtomicBool,
    cycle_handle: Mutex<Option<JoinHandle<()>>>,
}

impl TrafficLight {
    pub fn new() -> Self {
        Self::with_config(CycleConfig::default())
    }

    pub fn with_config(config: CycleConfig) -> Self {
        Self {
            inner: Arc::new(LightInner {
                phase: AtomicU8::new(TrafficLightPhase::Red.as_u8()),
                updates: BlockingChannel::new(),
                stop: StopSignal::new(),
                config,
            }),
            running: AtomicBool::new(false),
            cycle_handle: Mutex::new(None),
        }
    }

    /// Snapshot de la fase actual.
    ///
    /// No se sincroniza con el hilo de ciclo más allá del load acquire:
    /// es una foto del momento, no una lectura linealizable del ciclo.
    pub fn current_phase(&self) -> TrafficLightPhase {
        TrafficLightPhase::from_u8(self.inner.phase.load(Ordering::Acquire))
    }

    /// true mientras el hilo de ciclo este corriendo
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Arranca el hilo de ciclo de este semáforo.
    ///
    /// Llamarlo más de una vez es un error de uso: la segunda llamada se
    /// rechaza con un warning en el log, sin lanzar otro hilo. Lo mismo
    /// aplica sobre un semáforo ya detenido.
    pub fn simulate(&self) {
        if self.inner.stop.is_raised() {
            tl_log!("[TrafficLight] ⚠ simulate() sobre un semaforo detenido, se ignora");
            return;
        }
        if self.running.swap(true, Ordering::SeqCst) {
            tl_log!("[TrafficLight] ⚠ simulate() llamado dos veces, se ignora");
            return;
        }

        let inner = Arc::clone(&self.inner);
        let handle = thread::spawn(move || cycle_through_phases(&inner));
        *self.cycle_handle.lock().unwrap() = Some(handle);
    }

    /// Bloquea hasta recibir una notificación de fase verde.
    ///
    /// Consume notificaciones del canal, descartando las rojas: un caller
    /// que llega cuando la luz ya está en verde espera igual hasta la
    /// PRÓXIMA transición a verde. Con varios callers concurrentes cada
    /// notificación la gana uno solo y el resto espera el siguiente ciclo.
    pub fn wait_for_green(&self) -> Result<(), LightStopped> {
        loop {
            match self.inner.updates.receive() {
                Some(TrafficLightPhase::Green) => return Ok(()),
                Some(TrafficLightPhase::Red) => continue,
                None => return Err(LightStopped),
            }
        }
    }

    /// Detiene el hilo de ciclo y cierra el canal de notificaciones.
    ///
    /// Los `wait_for_green` bloqueados despiertan con `LightStopped`.
    /// Idempotente; el join es rápido aunque el ciclo esté a mitad de
    /// un sleep largo.
    pub fn stop(&self) {
        self.inner.stop.raise();
        self.inner.updates.close();
        if let Some(handle) = self.cycle_handle.lock().unwrap().take() {
            let _ = handle.join();
        }
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TrafficLight {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Loop de ciclo: corre en el hilo de fondo hasta la señal de parada.
///
/// Cada iteración sortea la duración de la fase, duerme, alterna la
/// fase, publica la transición y hace la pausa nominal.
fn cycle_through_phases(inner: &LightInner) {
    // un solo generador para todo el hilo, re-sorteado por iteracion
    let mut rng = rand::rng();
    let min_ms = inner.config.min_cycle.as_millis() as u64;
    let max_ms = inner.config.max_cycle.as_millis() as u64;

    loop {
        let cycle_ms = rng.random_range(min_ms..=max_ms);
        if inner.stop.wait_or_stop(Duration::from_millis(cycle_ms)) {
            break;
        }

        // la fase solo la muta este hilo; el store release publica el
        // cambio para los lectores de current_phase
        let next = TrafficLightPhase::from_u8(inner.phase.load(Ordering::Relaxed)).toggled();
        inner.phase.store(next.as_u8(), Ordering::Release);
        tl_log!("[TrafficLight] 🚦 cambio de fase a {:?} ({} ms)", next, cycle_ms);

        if inner.updates.send(next).is_err() {
            // canal cerrado: stop() esta en progreso
            break;
        }

        if inner.stop.wait_or_stop(inner.config.pause) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_light_is_red_and_idle() {
        let light = TrafficLight::new();
        assert_eq!(light.current_phase(), TrafficLightPhase::Red);
        assert!(!light.is_running());
    }

    #[test]
    fn test_stop_without_simulate_is_safe() {
        let light = TrafficLight::new();
        light.stop();
        light.stop();
        assert!(!light.is_running());
    }

    #[test]
    fn test_wait_for_green_after_stop_errors() {
        let light = TrafficLight::new();
        light.stop();
        assert_eq!(light.wait_for_green(), Err(LightStopped));
    }

    #[test]
    fn test_simulate_after_stop_is_rejected() {
        let light = TrafficLight::new();
        light.stop();
        light.simulate();
        assert!(!light.is_running());
    }
}
