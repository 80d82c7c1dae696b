// Formatting and logging helpers shared by the DOM binding and the demo.

/// CSS `rotate(...)` value for `degrees`, fixed to `precision` decimals.
pub fn format_rotate(degrees: f64, precision: usize) -> String {
    format!("rotate({:.*}deg)", precision, degrees)
}

/// Human readable angle for readouts, e.g. `123.4°`.
pub fn format_degrees(degrees: f64) -> String {
    format!("{:.1}°", degrees)
}

/// Route `log` records to the browser console.
pub fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        // already initialised, e.g. after a hot reload
        log::debug!("logger already installed");
    }
}
