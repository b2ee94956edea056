use fancy_regex::Regex;
use rewire_dns_domain::is_valid_hostname;
use std::net::Ipv4Addr;

/// One override entry, kept in hosts-file order.
#[derive(Debug)]
pub enum HostRule {
    /// `example.com 1.2.3.4`: exact hostname match, ASCII case-insensitive.
    Literal { domain: String, ip: Ipv4Addr },
    /// `/regex/ [ip]`: pattern compiled once at parse time. Without a fixed
    /// ip the matched domain itself is echoed back as the resolution,
    /// provided it re-validates as a hostname.
    Pattern {
        matcher: Regex,
        ip: Option<Ipv4Addr>,
    },
}

impl HostRule {
    /// The resolved value for `domain`, or None when this rule does not
    /// apply.
    pub fn resolve(&self, domain: &str) -> Option<String> {
        match self {
            HostRule::Literal { domain: host, ip } => {
                host.eq_ignore_ascii_case(domain).then(|| ip.to_string())
            }
            HostRule::Pattern { matcher, ip } => {
                if !matcher.is_match(domain).unwrap_or(false) {
                    return None;
                }
                match ip {
                    Some(ip) => Some(ip.to_string()),
                    None => is_valid_hostname(domain).then(|| domain.to_string()),
                }
            }
        }
    }
}
