use super::config::{HostsConfig, DEFAULT_DNS_PORT};
use super::rules::HostRule;
use fancy_regex::Regex;
use rewire_dns_domain::is_valid_hostname;
use std::net::{Ipv4Addr, SocketAddr};
use tracing::warn;

/// Parses a hosts definition into a config.
///
/// Lines are processed in file order. Unrecognized or malformed lines are
/// skipped with a warning naming the line number; they are never fatal. A
/// definition without any `proxy` directive parses fine here; whether that
/// is acceptable is the caller's call (fatal at startup, rejected on
/// reload).
pub fn parse_hosts(definition: &str) -> HostsConfig {
    let mut config = HostsConfig::default();

    for (idx, raw) in definition.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        if let Err(reason) = parse_line(line, &mut config) {
            warn!(line = idx + 1, source = %line, reason = %reason, "Ignoring hosts line");
        }
    }

    config
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default()
}

fn parse_line(line: &str, config: &mut HostsConfig) -> Result<(), String> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().unwrap_or_default();
    let value = tokens.next();

    if tokens.next().is_some() {
        return Err("trailing tokens".to_string());
    }

    match (head, value) {
        ("bind", Some(value)) => parse_bind(value, config),
        ("proxy", Some(value)) => {
            let addr = parse_endpoint(value)
                .ok_or_else(|| format!("bad proxy address '{value}'"))?;
            config.proxies.push(addr);
            Ok(())
        }
        (pattern, ip) if is_pattern(pattern) => parse_pattern(pattern, ip, config),
        (domain, Some(ip)) => parse_literal(domain, ip, config),
        _ => Err("expected a directive or a domain/ip pair".to_string()),
    }
}

fn parse_bind(value: &str, config: &mut HostsConfig) -> Result<(), String> {
    let (addr_part, port_part) = match value.split_once(':') {
        Some((addr, port)) => (addr, Some(port)),
        None => (value, None),
    };

    let addr: Ipv4Addr = addr_part
        .parse()
        .map_err(|_| format!("bad bind address '{value}'"))?;

    if let Some(port) = port_part {
        if port.is_empty() || port.len() > 5 || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("bad bind port '{port}'"));
        }
        // A numeric value above 65535 keeps the port already in effect.
        if let Ok(port) = port.parse::<u16>() {
            config.bind_port = port;
        }
    }

    // The wildcard address means "all interfaces", represented as absent.
    config.bind_address = (!addr.is_unspecified()).then_some(addr);
    Ok(())
}

/// `<ipv4>` or `<ipv4>:<port>`; a bare address gets the standard DNS port.
fn parse_endpoint(value: &str) -> Option<SocketAddr> {
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return addr.is_ipv4().then_some(addr);
    }
    value
        .parse::<Ipv4Addr>()
        .ok()
        .map(|ip| SocketAddr::from((ip, DEFAULT_DNS_PORT)))
}

fn is_pattern(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('/') && token.ends_with('/')
}

fn parse_pattern(
    token: &str,
    ip: Option<&str>,
    config: &mut HostsConfig,
) -> Result<(), String> {
    let inner = &token[1..token.len() - 1];
    let matcher = Regex::new(&format!("(?i){inner}"))
        .map_err(|e| format!("bad pattern '{inner}': {e}"))?;

    let ip = match ip {
        Some(ip) => Some(
            ip.parse::<Ipv4Addr>()
                .map_err(|_| format!("bad ip '{ip}'"))?,
        ),
        None => None,
    };

    config.rules.push(HostRule::Pattern { matcher, ip });
    Ok(())
}

fn parse_literal(domain: &str, ip: &str, config: &mut HostsConfig) -> Result<(), String> {
    if !is_valid_hostname(domain) {
        return Err(format!("bad domain '{domain}'"));
    }
    let ip: Ipv4Addr = ip.parse().map_err(|_| format!("bad ip '{ip}'"))?;

    config.rules.push(HostRule::Literal {
        domain: domain.to_string(),
        ip,
    });
    Ok(())
}
