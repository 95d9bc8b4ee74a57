//! The server's network perimeter: a fixed table of inbound rules.

use serde::Serialize;
use std::fmt;

use crate::constants::{ANY_IPV4, BEACON_PORT, GAME_PORT, QUERY_PORT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Udp,
    Tcp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Udp => write!(f, "udp"),
            Protocol::Tcp => write!(f, "tcp"),
        }
    }
}

/// One permitted inbound traffic pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngressRule {
    pub protocol: Protocol,
    pub port: u16,
    pub source: String,
    pub description: String,
}

impl IngressRule {
    fn new(protocol: Protocol, port: u16, description: &str) -> Self {
        IngressRule {
            protocol,
            port,
            source: ANY_IPV4.to_string(),
            description: description.to_string(),
        }
    }
}

/// The four rules game clients need, in declaration order. Not
/// parameterized: the set is part of the wire-level contract with the game
/// client, and the order is kept stable for auditability.
pub fn ingress_rules() -> Vec<IngressRule> {
    vec![
        IngressRule::new(Protocol::Udp, GAME_PORT, "Game port"),
        IngressRule::new(Protocol::Tcp, GAME_PORT, "Game port 2"),
        IngressRule::new(Protocol::Udp, BEACON_PORT, "Beacon port"),
        IngressRule::new(Protocol::Udp, QUERY_PORT, "Query port"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_four_rules_in_order() {
        let rules = ingress_rules();
        let pairs: Vec<(Protocol, u16)> = rules.iter().map(|r| (r.protocol, r.port)).collect();
        assert_eq!(
            pairs,
            vec![
                (Protocol::Udp, 7777),
                (Protocol::Tcp, 7777),
                (Protocol::Udp, 15000),
                (Protocol::Udp, 15777),
            ]
        );
    }

    #[test]
    fn test_every_rule_permits_any_source() {
        for rule in ingress_rules() {
            assert_eq!(rule.source, "0.0.0.0/0", "rule {:?}", rule.description);
        }
    }

    #[test]
    fn test_descriptions_are_stable() {
        let descriptions: Vec<String> =
            ingress_rules().into_iter().map(|r| r.description).collect();
        assert_eq!(
            descriptions,
            vec!["Game port", "Game port 2", "Beacon port", "Query port"]
        );
    }
}
