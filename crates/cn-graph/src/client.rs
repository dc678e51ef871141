//! Clients attached to stations.

use core::cmp::Ordering;
use core::fmt;

use cn_core::{AreaCode, PhoneNumber};

/// A subscriber attached to a station.
///
/// The area code is a copy of the owning station's label, fixed when the
/// client is created. Clients order by phone number; name and area code only
/// break ties so the order stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client {
    name: String,
    phone: PhoneNumber,
    area_code: AreaCode,
}

impl Client {
    pub fn new(name: impl Into<String>, phone: PhoneNumber, area_code: AreaCode) -> Self {
        Self {
            name: name.into(),
            phone,
            area_code,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> PhoneNumber {
        self.phone
    }

    pub fn area_code(&self) -> AreaCode {
        self.area_code
    }
}

impl Ord for Client {
    fn cmp(&self, other: &Self) -> Ordering {
        self.phone
            .cmp(&other.phone)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.area_code.cmp(&other.area_code))
    }
}

impl PartialOrd for Client {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.area_code, self.phone)
    }
}
