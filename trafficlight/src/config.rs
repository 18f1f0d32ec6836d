// parametros de tiempo del ciclo del semaforo

use std::time::Duration;

/// Duración del ciclo y pausa entre iteraciones.
///
/// Los defaults replican el semáforo original: cada fase dura un valor
/// uniforme entre 4 y 6 segundos (inclusive), con una pausa nominal de
/// 1 ms al final de cada iteración. `min_cycle` debe ser <= `max_cycle`.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    pub min_cycle: Duration,
    pub max_cycle: Duration,
    pub pause: Duration,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            min_cycle: Duration::from_secs(4),
            max_cycle: Duration::from_secs(6),
            pause: Duration::from_millis(1),
        }
    }
}

impl CycleConfig {
    /// config rapida en milisegundos, util para pruebas y demos
    pub fn millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_cycle: Duration::from_millis(min_ms),
            max_cycle: Duration::from_millis(max_ms),
            pause: Duration::from_millis(1),
        }
    }
}
