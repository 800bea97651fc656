/// Writes a formatted line to the browser console.
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::log::write(&format!($($arg)*))
    };
}

pub(crate) use console_log;

#[cfg(target_arch = "wasm32")]
pub fn write(message: &str) {
    web_sys::console::log_1(&message.into());
}

// Imported JS functions panic off wasm, so native builds drop the line.
#[cfg(not(target_arch = "wasm32"))]
pub fn write(_message: &str) {}
