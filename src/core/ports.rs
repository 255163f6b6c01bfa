use crate::domain::model::{PortMapping, Protocol};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortPart {
    Host,
    Container,
}

impl std::fmt::Display for PortPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortPart::Host => f.write_str("host port"),
            PortPart::Container => f.write_str("container port"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {part} {token:?}")]
pub struct PortSpecError {
    /// The whole token as written in the compose file.
    pub token: String,
    pub part: PortPart,
}

/// Parse `"80"`, `"8080:80"` or `"8080:80/udp"` into a port mapping.
///
/// An unknown protocol suffix is ignored and the mapping falls back to TCP.
pub fn parse_port(token: &str) -> Result<PortMapping, PortSpecError> {
    let (spec, protocol) = match token.rsplit_once('/') {
        Some((spec, suffix)) => (spec, parse_protocol(suffix)),
        None => (token, Protocol::Tcp),
    };

    let fail = |part| PortSpecError {
        token: token.to_string(),
        part,
    };

    match spec.split_once(':') {
        Some((host, container)) => {
            let host_port = host.trim().parse::<u16>().map_err(|_| fail(PortPart::Host))?;
            let container_port = container
                .trim()
                .parse::<u16>()
                .map_err(|_| fail(PortPart::Container))?;

            Ok(PortMapping {
                container_port,
                host_port: Some(host_port),
                protocol,
            })
        }
        None => {
            let container_port = spec.parse::<u16>().map_err(|_| fail(PortPart::Container))?;

            Ok(PortMapping {
                container_port,
                host_port: None,
                protocol,
            })
        }
    }
}

/// Parse every token in order, stopping at the first malformed one.
pub fn parse_ports<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<PortMapping>, PortSpecError> {
    tokens.iter().map(|t| parse_port(t.as_ref())).collect()
}

fn parse_protocol(suffix: &str) -> Protocol {
    if suffix.eq_ignore_ascii_case("udp") {
        Protocol::Udp
    } else {
        Protocol::Tcp
    }
}
