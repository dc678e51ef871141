//! Call placement between two clients.

use core::fmt;
use core::str::FromStr;

use cn_core::{AreaCode, PhoneNumber};
use cn_graph::{Client, Network, Station, Trajectory};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Digits in a local phone number.
pub const PHONE_DIGITS: usize = 8;

/// One side of a call: `AREA-PHONE`, e.g. `55-12345678`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub area_code: AreaCode,
    pub phone: PhoneNumber,
}

impl Endpoint {
    pub fn new(area_code: AreaCode, phone: PhoneNumber) -> Self {
        Self { area_code, phone }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:0width$}",
            self.area_code,
            self.phone.get(),
            width = PHONE_DIGITS
        )
    }
}

impl FromStr for Endpoint {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        parse_endpoint(s)
    }
}

/// Parse `AREA-PHONE` or `AREA.PHONE`; the phone must have exactly eight digits.
pub fn parse_endpoint(input: &str) -> AppResult<Endpoint> {
    let invalid = || {
        AppError::InvalidInput(format!(
            "'{input}' is not a valid endpoint, expected areaCode-XXXXXXXX"
        ))
    };

    let input = input.trim();
    let (code, phone) = input.split_once(['-', '.']).ok_or_else(invalid)?;
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(code) || !all_digits(phone) || phone.len() != PHONE_DIGITS {
        return Err(invalid());
    }

    Ok(Endpoint {
        area_code: code.parse()?,
        phone: phone.parse()?,
    })
}

/// How the call is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    Voice,
    Video,
}

/// A routed call, ready to be connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPlan {
    pub caller: Client,
    pub callee: Client,
    pub route: Trajectory,
    /// Video is offered when the route uses at most half of the network's links.
    pub video_offered: bool,
}

impl CallPlan {
    pub fn hops(&self) -> usize {
        self.route.hops()
    }

    /// Video only when it was offered and requested.
    pub fn mode(&self, want_video: bool) -> CallMode {
        if self.video_offered && want_video {
            CallMode::Video
        } else {
            CallMode::Voice
        }
    }
}

/// Route a call between two clients.
///
/// Each client is looked up by its own phone in its own station. The network
/// must be consistent, since the video decision depends on its edge count.
pub fn place_call(network: &mut Network, from: Endpoint, to: Endpoint) -> AppResult<CallPlan> {
    if from == to {
        return Err(AppError::SelfCall);
    }

    let caller = find_client(network, from)?;
    let callee = find_client(network, to)?;

    let route = network.trajectory(from.area_code, to.area_code)?;
    if route.is_empty() {
        return Err(AppError::NoRoute {
            from: from.area_code,
            to: to.area_code,
        });
    }

    let edges = network.quick_edges_size()?;
    let video_offered = route.hops() <= edges / 2;
    debug!(%from, %to, hops = route.hops(), edges, video_offered, "call routed");

    Ok(CallPlan {
        caller,
        callee,
        route,
        video_offered,
    })
}

fn find_client(network: &Network, endpoint: Endpoint) -> AppResult<Client> {
    let station: &Station = network
        .station(endpoint.area_code)
        .ok_or(AppError::StationNotFound(endpoint.area_code))?;
    station
        .clients()
        .iter()
        .find(|client| client.phone() == endpoint.phone)
        .cloned()
        .ok_or(AppError::ClientNotFound {
            area_code: endpoint.area_code,
            phone: endpoint.phone,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cn_graph::NetworkBuilder;
    use proptest::prelude::*;

    fn code(raw: u32) -> AreaCode {
        AreaCode::from_u32(raw)
    }

    fn endpoint(area: u32, phone: u64) -> Endpoint {
        Endpoint::new(code(area), PhoneNumber::from_u64(phone))
    }

    /// 10 - 20 - 30 - 40, plus an isolated 50.
    fn chain() -> Network {
        let mut builder = NetworkBuilder::new();
        for raw in [10_u32, 20, 30, 40, 50] {
            let phone = u64::from(raw) * 1_000_000;
            builder
                .add_station(
                    format!("S{raw}"),
                    code(raw),
                    [
                        ("first", PhoneNumber::from_u64(phone)),
                        ("second", PhoneNumber::from_u64(phone + 1)),
                    ],
                )
                .unwrap();
        }
        for (a, b) in [(10, 20), (20, 30), (30, 40)] {
            builder.add_link(code(a), code(b)).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn parses_both_separators() {
        assert_eq!(parse_endpoint("55-12345678").unwrap(), endpoint(55, 12_345_678));
        assert_eq!(parse_endpoint(" 801.00000042 ").unwrap(), endpoint(801, 42));
        assert_eq!(endpoint(801, 42).to_string(), "801-00000042");
    }

    #[test]
    fn rejects_malformed_endpoints() {
        let malformed = [
            "",
            "55",
            "55-1234567",
            "55-123456789",
            "-12345678",
            "a5-12345678",
            "55-1234567x",
            "55_12345678",
        ];
        for bad in malformed {
            assert!(
                matches!(parse_endpoint(bad), Err(AppError::InvalidInput(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn short_route_offers_video() {
        let mut network = chain();
        let plan = place_call(
            &mut network,
            endpoint(10, 10_000_000),
            endpoint(20, 20_000_001),
        )
        .unwrap();
        assert_eq!(plan.hops(), 1);
        assert!(plan.video_offered);
        assert_eq!(plan.mode(true), CallMode::Video);
        assert_eq!(plan.mode(false), CallMode::Voice);
        assert_eq!(plan.callee.name(), "second");
    }

    #[test]
    fn long_route_is_voice_only() {
        // 3 hops over 3 links: 3 > 3 / 2
        let mut network = chain();
        let plan = place_call(
            &mut network,
            endpoint(10, 10_000_000),
            endpoint(40, 40_000_000),
        )
        .unwrap();
        assert_eq!(plan.hops(), 3);
        assert!(!plan.video_offered);
        assert_eq!(plan.mode(true), CallMode::Voice);
    }

    #[test]
    fn same_station_call_has_single_stop() {
        let mut network = chain();
        let plan = place_call(
            &mut network,
            endpoint(30, 30_000_000),
            endpoint(30, 30_000_001),
        )
        .unwrap();
        assert_eq!(plan.route.area_codes(), &[code(30)]);
        assert!(plan.video_offered);
    }

    #[test]
    fn callee_is_looked_up_by_own_phone() {
        let mut network = chain();
        let err = place_call(
            &mut network,
            endpoint(10, 10_000_000),
            endpoint(20, 10_000_000),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::ClientNotFound { area_code, .. } if area_code == code(20)
        ));
    }

    #[test]
    fn call_failures() {
        let mut network = chain();
        let a = endpoint(10, 10_000_000);
        assert!(matches!(place_call(&mut network, a, a), Err(AppError::SelfCall)));
        assert!(matches!(
            place_call(&mut network, a, endpoint(99, 1)),
            Err(AppError::StationNotFound(c)) if c == code(99)
        ));
        assert!(matches!(
            place_call(&mut network, endpoint(10, 5), a),
            Err(AppError::ClientNotFound { .. })
        ));
        assert!(matches!(
            place_call(&mut network, a, endpoint(50, 50_000_000)),
            Err(AppError::NoRoute { .. })
        ));
    }

    proptest! {
        #[test]
        fn displayed_endpoints_parse_back(area in 0_u32..100_000, phone in 0_u64..100_000_000) {
            let original = endpoint(area, phone);
            prop_assert_eq!(original.to_string().parse::<Endpoint>().unwrap(), original);
        }
    }
}
