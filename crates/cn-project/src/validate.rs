//! Description validation logic.

use crate::schema::{LATEST_VERSION, LinkDef, NetworkDescription, StationDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_description(description: &NetworkDescription) -> Result<(), ValidationError> {
    if description.version == 0 || description.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: description.version,
        });
    }

    let mut codes = HashSet::new();
    for station in &description.stations {
        validate_station(station)?;
        if !codes.insert(station.code) {
            return Err(ValidationError::DuplicateId {
                id: station.code.to_string(),
                context: "stations".to_string(),
            });
        }
    }

    for (index, link) in description.links.iter().enumerate() {
        validate_link(index, link, &codes)?;
    }

    Ok(())
}

fn validate_station(station: &StationDef) -> Result<(), ValidationError> {
    if station.code < 0 || station.code > i64::from(u32::MAX) {
        return Err(ValidationError::InvalidValue {
            field: format!("station '{}' code", station.name),
            value: station.code.to_string(),
            reason: "must be a non-negative 32-bit integer".to_string(),
        });
    }

    if station.clients.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("station '{}' clients", station.name),
            value: "[]".to_string(),
            reason: "a station needs at least one client".to_string(),
        });
    }

    for client in &station.clients {
        if client.phone < 0 {
            return Err(ValidationError::InvalidValue {
                field: format!("client '{}' phone", client.name),
                value: client.phone.to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
    }

    Ok(())
}

fn validate_link(
    index: usize,
    link: &LinkDef,
    codes: &HashSet<i64>,
) -> Result<(), ValidationError> {
    for code in [link.station_a, link.station_b] {
        if !codes.contains(&code) {
            return Err(ValidationError::MissingReference {
                id: code.to_string(),
                context: format!("links[{index}]"),
            });
        }
    }

    if link.station_a == link.station_b {
        return Err(ValidationError::InvalidValue {
            field: format!("links[{index}]"),
            value: link.station_a.to_string(),
            reason: "a station cannot be linked to itself".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ClientDef;

    fn station(code: i64, phones: &[i64]) -> StationDef {
        StationDef {
            code,
            name: format!("S{code}"),
            clients: phones
                .iter()
                .map(|&phone| ClientDef {
                    name: format!("c{phone}"),
                    phone,
                })
                .collect(),
        }
    }

    fn link(a: i64, b: i64) -> LinkDef {
        LinkDef {
            station_a: a,
            station_b: b,
        }
    }

    fn description(stations: Vec<StationDef>, links: Vec<LinkDef>) -> NetworkDescription {
        NetworkDescription {
            stations,
            links,
            ..NetworkDescription::new("test")
        }
    }

    #[test]
    fn accepts_valid_description() {
        let desc = description(vec![station(10, &[1]), station(20, &[2])], vec![link(10, 20)]);
        assert_eq!(validate_description(&desc), Ok(()));
    }

    #[test]
    fn rejects_unknown_version() {
        let mut desc = description(vec![], vec![]);
        desc.version = 7;
        assert_eq!(
            validate_description(&desc),
            Err(ValidationError::UnsupportedVersion { version: 7 })
        );
        desc.version = 0;
        assert!(validate_description(&desc).is_err());
    }

    #[test]
    fn rejects_negative_code_and_phone() {
        let desc = description(vec![station(-3, &[1])], vec![]);
        assert!(matches!(
            validate_description(&desc),
            Err(ValidationError::InvalidValue { value, .. }) if value == "-3"
        ));

        let desc = description(vec![station(3, &[-1])], vec![]);
        assert!(matches!(
            validate_description(&desc),
            Err(ValidationError::InvalidValue { value, .. }) if value == "-1"
        ));
    }

    #[test]
    fn rejects_oversized_code() {
        let desc = description(vec![station(i64::from(u32::MAX) + 1, &[1])], vec![]);
        assert!(matches!(
            validate_description(&desc),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_station_without_clients() {
        let desc = description(vec![station(10, &[])], vec![]);
        assert!(matches!(
            validate_description(&desc),
            Err(ValidationError::InvalidValue { field, .. }) if field.contains("clients")
        ));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let desc = description(vec![station(10, &[1]), station(10, &[2])], vec![]);
        assert_eq!(
            validate_description(&desc),
            Err(ValidationError::DuplicateId {
                id: "10".to_string(),
                context: "stations".to_string(),
            })
        );
    }

    #[test]
    fn rejects_dangling_and_self_links() {
        let desc = description(vec![station(10, &[1])], vec![link(10, 99)]);
        assert_eq!(
            validate_description(&desc),
            Err(ValidationError::MissingReference {
                id: "99".to_string(),
                context: "links[0]".to_string(),
            })
        );

        let desc = description(vec![station(10, &[1])], vec![link(10, 10)]);
        assert!(matches!(
            validate_description(&desc),
            Err(ValidationError::InvalidValue { field, .. }) if field == "links[0]"
        ));
    }
}
