//! Network argument validation for connection dialogs.

use std::net::Ipv4Addr;

/// Ports are accepted in `[0, PORT_LIMIT)`.
pub const PORT_LIMIT: i64 = 65535;

/// Check that `addr` is `"localhost"` or a dotted-quad IPv4 address.
pub fn is_valid_ipv4(addr: &str) -> bool {
    addr == "localhost" || addr.parse::<Ipv4Addr>().is_ok()
}

/// Check that `port` falls in the accepted range.
pub fn is_valid_port(port: i64) -> bool {
    (0..PORT_LIMIT).contains(&port)
}
