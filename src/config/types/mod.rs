//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Field paths used in diagnostics              |
//! | `handle` | Global read-only configuration handle        |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ResolveError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
