//! Reusable helpers for desktop GUI tooling: raster images carried as Base64
//! text, identifier byte packing, terminator-bounded stream copying, argument
//! guards, colour palettes and localized timestamps.
//!
//! Everything here is stateless and synchronous. Only [`stream::copy_until`]
//! blocks, and only on the streams the caller hands it.

pub mod check;
pub mod convert;
pub mod datefmt;
pub mod error;
pub mod palette;
pub mod stream;

pub use check::{Defined, is_defined, is_positive, is_valid_ipv4, is_valid_port};
pub use convert::{id_from_bytes, id_to_bytes, image_from_base64, image_to_base64};
pub use error::{ToolboxError, ToolboxResult};
pub use palette::{Color, rainbow, rainbow_with};
pub use stream::{CopyOutcome, copy_until};

/// Version string embedded at build time (`-dev` suffix off release builds).
pub const VERSION: &str = env!("APP_VERSION_DISPLAY");

/// Year this build was produced in.
pub const BUILD_YEAR: &str = env!("APP_BUILD_YEAR");
