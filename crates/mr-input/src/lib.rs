//! mr-input: initialization-input staging for the mooring engine.
//!
//! Host callers fill an [`InitInput`] with raw text lines (cable library,
//! nodes, elements, solver options), the three environment constants and
//! the coupling flag. The line parser then reads everything back by index.
//!
//! # Example
//!
//! ```
//! use mr_input::{InitInput, RecordKind};
//!
//! let mut input = InitInput::new();
//! input.push_cable_library("CABLE1 ...");
//! input.push_cable_library("CABLE2 ...");
//! input.set_depth_f64(350.0);
//!
//! assert_eq!(input.sizeof_cable_library(), 2);
//! assert_eq!(input.cable_library(1).unwrap(), "CABLE2 ...");
//! assert_eq!(input.element(0).unwrap_err().kind(), RecordKind::Element);
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod input;
pub mod numbering;
pub mod record;

// Re-exports for ergonomics
pub use config::InputConfig;
pub use environment::{EnvScalar, EnvSync, Environment, UNSET_SENTINEL};
pub use error::{InputError, InputResult};
pub use input::InitInput;
pub use numbering::Numbering;
pub use record::{RecordKind, RecordSequence};
