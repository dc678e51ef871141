//! Publicity campaigns: ordered client listings.

use core::str::FromStr;

use cn_core::AreaCode;
use cn_graph::{Client, Network};

use crate::error::{AppError, AppResult};
use crate::network_service::get_station;

/// Order in which a network-wide campaign reaches its clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicityOrder {
    /// Ascending phone number across the whole network.
    Phone,
    /// Station by station, ascending area code.
    AreaCode,
}

impl FromStr for PublicityOrder {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim() {
            "phone" => Ok(PublicityOrder::Phone),
            "area-code" | "areaCode" => Ok(PublicityOrder::AreaCode),
            other => Err(AppError::InvalidInput(format!(
                "unknown publicity order '{other}', expected phone or area-code"
            ))),
        }
    }
}

pub fn by_phone(network: &mut Network) -> Vec<Client> {
    network.clients_by_phone()
}

pub fn by_area_code(network: &Network) -> Vec<Client> {
    network.clients_by_station()
}

/// Every client of the network in the requested order.
pub fn send(network: &mut Network, order: PublicityOrder) -> Vec<Client> {
    match order {
        PublicityOrder::Phone => by_phone(network),
        PublicityOrder::AreaCode => by_area_code(network),
    }
}

/// Clients of one station, ascending by phone.
pub fn for_station(network: &Network, area_code: AreaCode) -> AppResult<Vec<Client>> {
    let station = get_station(network, area_code)?;
    Ok(station.clients().iter().cloned().collect())
}
