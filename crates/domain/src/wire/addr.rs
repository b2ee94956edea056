use crate::errors::DomainError;

/// Folds a dotted-quad IPv4 string into its 32-bit big-endian value.
///
/// Requires exactly four numeric octets, each in `0..=255`. Anything else
/// (missing octets, junk characters, out-of-range values, a domain name
/// that leaked in through an echo-only pattern rule) is rejected.
pub fn numify(ip: &str) -> Result<u32, DomainError> {
    let mut value: u32 = 0;
    let mut octets = 0;

    for part in ip.split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidIpAddress(ip.to_string()));
        }
        let octet: u32 = part
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;
        if octet > 255 {
            return Err(DomainError::InvalidIpAddress(ip.to_string()));
        }
        value = (value << 8) | octet;
        octets += 1;
    }

    if octets != 4 {
        return Err(DomainError::InvalidIpAddress(ip.to_string()));
    }

    Ok(value)
}

/// Inverse of [`numify`]: renders a 32-bit value as a dotted quad,
/// most-significant octet first.
pub fn denumify(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{}.{}.{}.{}", a, b, c, d)
}
