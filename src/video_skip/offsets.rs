use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::errors::OffsetsError;

/// Per-service playback offset table.
///
/// Streaming services do not all start their clocks at the same point, so
/// the document carries one offset (in seconds) per service name. Keys are
/// stored sorted so the serialized form is deterministic for a given table.
///
/// Parsed from a `name=seconds[,name=seconds...]` specification string; the
/// empty string yields an empty table. Offset values follow the JSON number
/// grammar, which keeps `google=0` rendering as `0` rather than `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceOffsets(BTreeMap<String, Number>);

impl ServiceOffsets {
    /// Create an empty offset table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of services in the table
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the offset for a service - used by tests
    #[allow(dead_code)]
    pub fn get(&self, service: &str) -> Option<&Number> {
        self.0.get(service)
    }

    /// Set the offset for a service, replacing any previous value
    #[allow(dead_code)]
    pub fn insert(&mut self, service: impl Into<String>, seconds: Number) {
        self.0.insert(service.into(), seconds);
    }

    /// Render the table as a single-line JSON object, keys in sorted order
    pub fn to_json(&self) -> String {
        // BTreeMap<String, Number> cannot produce invalid JSON
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

impl FromStr for ServiceOffsets {
    type Err = OffsetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut offsets = BTreeMap::new();

        if s.trim().is_empty() {
            return Ok(ServiceOffsets(offsets));
        }

        for entry in s.split(',') {
            let entry = entry.trim();
            let (service, value) = entry
                .split_once('=')
                .ok_or_else(|| OffsetsError::MissingSeparator(entry.to_string()))?;
            let service = service.trim();
            let value = value.trim();

            let seconds = serde_json::from_str::<Number>(value).map_err(|_| {
                OffsetsError::InvalidSeconds {
                    service: service.to_string(),
                    value: value.to_string(),
                }
            })?;

            offsets.insert(service.to_string(), seconds);
        }

        Ok(ServiceOffsets(offsets))
    }
}
