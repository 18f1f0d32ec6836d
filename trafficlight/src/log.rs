// trafficlight/src/log.rs
// Logger mínimo redirigible. Por defecto imprime a consola.
// Se puede redirigir con set_logger(fn(&str)) antes del primer log.

use once_cell::sync::OnceCell;

type LogFn = fn(&str);

static LOGGER: OnceCell<LogFn> = OnceCell::new();

fn default_log(s: &str) {
    println!("{}", s);
}

/// instala un logger alternativo; solo la primera llamada tiene efecto
pub fn set_logger(f: LogFn) {
    let _ = LOGGER.set(f);
}

pub fn log_str(s: &str) {
    let f = LOGGER.get().copied().unwrap_or(default_log);
    f(s);
}

#[macro_export]
macro_rules! tl_log {
    ($($arg:tt)*) => {{
        $crate::log::log_str(&format!($($arg)*));
    }};
}
