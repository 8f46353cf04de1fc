//! Scan `*.interface.<ext>` declarations and emit mock data modules.
pub mod cli;
pub mod emit;
pub mod error;
pub mod fs_layer;
pub mod ir;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod synth;

pub use error::{GenError, Result};
pub use ir::{Field, InterfaceRecord};
pub use registry::Registry;
