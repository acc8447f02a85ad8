//! Host Services
//!
//! The collaborators the appkernel dispatch core consumes but does not own.
//! Each one is a trait with a small default implementation:
//!
//! - [`Logger`]: structured `log(level, message, data)` sink
//! - [`AddonDirectory`]: the list of enabled addons and their root directories
//! - [`AssetLookup`]: maps an asset URL path to a file and a MIME type

mod addons;
mod assets;
mod error;
mod log;

pub use addons::{Addon, AddonDirectory, AddonRegistry};
pub use assets::{AssetLookup, DirAssets};
pub use error::{ServiceError, ServiceResult};
pub use log::{FileLogger, LogLevel, LogRecord, Logger, TracingLogger};
