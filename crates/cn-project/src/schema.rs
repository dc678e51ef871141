//! Network description schema.
//!
//! Codes and phone numbers are kept as raw signed integers here so that
//! validation can report negative values instead of failing to parse.

use serde::Deserialize;

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkDescription {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub stations: Vec<StationDef>,
    #[serde(default)]
    pub links: Vec<LinkDef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StationDef {
    pub code: i64,
    pub name: String,
    #[serde(default)]
    pub clients: Vec<ClientDef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientDef {
    pub name: String,
    pub phone: i64,
}

/// Undirected link; the order of the two codes carries no meaning.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LinkDef {
    pub station_a: i64,
    pub station_b: i64,
}

impl NetworkDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            stations: Vec::new(),
            links: Vec::new(),
        }
    }
}
