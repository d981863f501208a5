// Server module entry
// Listener setup, the accept loop, per-connection handling and signals.

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), so the accept
// loop lives in server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::bind_listener;
pub use server_loop::run;
pub use signal::{start_signal_handler, SignalHandler};
