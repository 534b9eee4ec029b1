use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::schema::Validator;

/// Dotted-quad IPv4 address.
pub fn ipv4() -> Validator {
    Validator::for_str("Invalid IPv4 address", |s| s.parse::<Ipv4Addr>().is_ok())
        .with_description("Validates IPv4 address format (e.g., 192.168.1.1)")
}

/// IPv6 address, including compressed forms such as `::1`.
pub fn ipv6() -> Validator {
    Validator::for_str("Invalid IPv6 address", |s| s.parse::<Ipv6Addr>().is_ok())
        .with_description("Validates IPv6 address format (e.g., 2001:db8::8a2e:370:7334)")
}

/// Either an IPv4 or an IPv6 address.
pub fn ip() -> Validator {
    Validator::for_str("Invalid IP address (must be IPv4 or IPv6)", |s| {
        s.parse::<IpAddr>().is_ok()
    })
    .with_description("Validates IP address format (both IPv4 and IPv6)")
}

/// An integral port number in `0..=65535`.
pub fn port() -> Validator {
    Validator::for_f64(
        "Invalid port number (must be an integer between 0 and 65535)",
        |n| n.fract() == 0.0 && (0.0..=65535.0).contains(&n),
    )
    .with_description("Validates port number (0-65535)")
}
