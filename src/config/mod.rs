//! Runtime settings read from the environment.

mod loader;

pub use loader::{Settings, DEFAULT_BIND_ADDR, DEFAULT_MAX_CONNECTIONS};
