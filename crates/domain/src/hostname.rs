//! Hostname validation for override entries (RFC 1034 §3.5 shape).

/// Maximum length of the textual form of a domain name.
const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// Returns `true` when `domain` is a plausible hostname: at most 253 bytes,
/// dot-separated labels of up to 63 letters/digits/hyphens each, alphanumeric
/// at both ends of every label, and at least one dot.
pub fn is_valid_hostname(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_LABEL_LEN {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}
