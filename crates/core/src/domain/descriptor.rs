// Stream Descriptor Domain Model

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compound stream identifier of the form `<namespace>/<queue>`.
///
/// Only the queue segment is significant to the broker; the namespace is an
/// organizational prefix owned by the deployment. Parsing validates the shape
/// up front so downstream code never indexes into a malformed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StreamDescriptor {
    namespace: String,
    queue_name: String,
}

impl StreamDescriptor {
    /// Parse a compound name into a descriptor.
    ///
    /// Requires exactly one `/` separator and non-empty segments on both
    /// sides; anything else is `CoreError::MalformedDescriptor`.
    pub fn parse(name: &str) -> Result<Self> {
        let mut parts = name.splitn(3, '/');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(queue_name), None)
                if !namespace.is_empty() && !queue_name.is_empty() =>
            {
                Ok(Self {
                    namespace: namespace.to_string(),
                    queue_name: queue_name.to_string(),
                })
            }
            _ => Err(CoreError::MalformedDescriptor(name.to_string())),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The broker-significant segment (after the separator).
    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }
}

impl FromStr for StreamDescriptor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for StreamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.queue_name)
    }
}

impl TryFrom<String> for StreamDescriptor {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<StreamDescriptor> for String {
    fn from(d: StreamDescriptor) -> Self {
        d.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_descriptor() {
        let d = StreamDescriptor::parse("ns/orders").unwrap();
        assert_eq!(d.namespace(), "ns");
        assert_eq!(d.queue_name(), "orders");
        assert_eq!(d.to_string(), "ns/orders");
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = StreamDescriptor::parse("badname").unwrap_err();
        assert!(matches!(err, CoreError::MalformedDescriptor(_)));
        assert!(err.to_string().contains("badname"));
    }

    #[test]
    fn test_parse_too_many_separators() {
        let err = StreamDescriptor::parse("a/b/c").unwrap_err();
        assert!(matches!(err, CoreError::MalformedDescriptor(_)));
    }

    #[test]
    fn test_parse_empty_segments() {
        assert!(StreamDescriptor::parse("/orders").is_err());
        assert!(StreamDescriptor::parse("ns/").is_err());
        assert!(StreamDescriptor::parse("/").is_err());
        assert!(StreamDescriptor::parse("").is_err());
    }

    #[test]
    fn test_from_str_roundtrip() {
        let d: StreamDescriptor = "metrics/events".parse().unwrap();
        assert_eq!(d.queue_name(), "events");
    }
}
