//! DNS zone as reported by the provider.

use serde::Deserialize;

/// A provider-managed zone. Only `id` and `name` are used; any other
/// fields in the provider payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// Raw outcome of a zone listing call.
///
/// `zones` is only populated when `status` is 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneListing {
    pub status: u16,
    pub zones: Vec<Zone>,
}

impl ZoneListing {
    pub fn new(status: u16, zones: Vec<Zone>) -> Self {
        Self { status, zones }
    }

    /// Returns the id of the first zone whose name equals `domain` exactly.
    ///
    /// Zones are scanned in provider order; no ordering is assumed.
    pub fn find_zone_id(&self, domain: &str) -> Option<&str> {
        self.zones
            .iter()
            .find(|zone| zone.name == domain)
            .map(|zone| zone.id.as_str())
    }
}
