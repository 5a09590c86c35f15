//! Domain Layer
//!
//! The records the extension persists and exchanges. This layer has NO
//! external dependencies (except serde for serialization).

mod bundle;
mod error;
mod item;
mod setting;

pub use bundle::{ExportBundle, EXPORT_FILENAME};
pub use error::{DomainError, DomainResult};
pub use item::{name_taken, Item};
pub use setting::Setting;
