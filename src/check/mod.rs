// Check module - defensive guards for user-supplied values.
// Definedness, sign checks, and network argument validation.

pub mod defined;
pub mod net;
pub mod numeric;


pub use defined::{Defined, is_defined};
pub use net::{is_valid_ipv4, is_valid_port};
pub use numeric::is_positive;
