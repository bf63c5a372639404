// Conversion module - transport encodings for GUI payloads.
// Identifiers packed to the RFC 4122 byte layout, raster images
// carried as Base64 strings.

pub mod ident;
pub mod raster;


// Re-export the main functions for easy access
pub use ident::{id_from_bytes, id_to_bytes};
pub use raster::{image_from_base64, image_to_base64};
