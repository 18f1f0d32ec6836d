// ============================================================================
// main.rs - Demo del semáforo: ciclo rápido y varios hilos esperando el verde
// ============================================================================

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use trafficlight::{tl_log, CycleConfig, TrafficLight};

fn main() {
    tl_log!("╔════════════════════════════════════════════════════════════╗");
    tl_log!("║              TrafficLight - demo concurrente               ║");
    tl_log!("╚════════════════════════════════════════════════════════════╝");

    // ciclo acelerado para que la demo no tarde segundos por fase
    let light = Arc::new(TrafficLight::with_config(CycleConfig::millis(400, 600)));
    tl_log!("🚦 fase inicial: {:?}", light.current_phase());

    light.simulate();

    // varios peatones compiten por las notificaciones de verde: cada
    // una la gana uno solo, el resto espera el ciclo siguiente
    let mut waiters = Vec::new();
    for i in 0..3 {
        let light = Arc::clone(&light);
        waiters.push(thread::spawn(move || match light.wait_for_green() {
            Ok(()) => tl_log!(
                "[Peaton-{}] ✅ cruzando, la luz esta en {:?}",
                i,
                light.current_phase()
            ),
            Err(e) => tl_log!("[Peaton-{}] 🚫 no cruzo: {}", i, e),
        }));
    }

    thread::sleep(Duration::from_secs(4));
    light.stop();

    for waiter in waiters {
        let _ = waiter.join();
    }
    tl_log!("Demo finalizada.");
}
