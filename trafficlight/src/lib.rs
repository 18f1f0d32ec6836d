// modulo raiz de trafficlight
// organiza el modelo del semaforo y su hilo de ciclo

pub mod config;
pub mod light;
pub mod log;
pub mod model;

// reexports comodos
pub use config::CycleConfig;
pub use light::{LightStopped, TrafficLight};
pub use model::TrafficLightPhase;
