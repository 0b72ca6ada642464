//! Data module - CSV loading and row handling

mod loader;
mod table;

pub use loader::{DataLoader, LoaderError, DEFAULT_PATH};
pub use table::SensorTable;
