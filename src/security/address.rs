//! Address validation for blacklist mutations.
//!
//! Every address entering the blacklist passes through [`validate`], so the
//! registry itself never has to re-check syntax or policy. Validation is
//! strict dotted-quad IPv4: four decimal octets in `0..=255`, separated by
//! dots, with no leading zeros and no surrounding whitespace.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Why an address literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input is not a dotted-quad IPv4 literal.
    #[error("not a valid IPv4 address: {0:?}")]
    Malformed(String),
    /// Syntactically valid, but the address may never be blacklisted.
    #[error("address {0} may not be blacklisted")]
    Forbidden(Ipv4Addr),
}

/// Parse and policy-check an address literal.
///
/// Loopback (`127.0.0.0/8`) and the unspecified address (`0.0.0.0`) are
/// refused: blacklisting either would lock out local operators or match
/// nothing meaningful. Everything else, private ranges included, is
/// accepted; operators guarding internal services have legitimate reasons
/// to ban RFC 1918 peers.
pub fn validate(raw: &str) -> Result<Ipv4Addr, AddressError> {
    let addr: Ipv4Addr = raw
        .parse()
        .map_err(|_| AddressError::Malformed(raw.to_string()))?;

    if addr.is_loopback() || addr.is_unspecified() {
        return Err(AddressError::Forbidden(addr));
    }

    Ok(addr)
}
