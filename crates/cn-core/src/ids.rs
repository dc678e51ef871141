use core::fmt;
use core::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Area code of a station; doubles as the station's vertex label.
///
/// Raw labels arrive as signed integers from loaders and front ends, so
/// `AreaCode::new` is where negative labels are rejected. Once a value exists
/// it is known to be a valid label.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaCode(u32);

impl AreaCode {
    /// Validate a raw label.
    pub fn new(label: i64) -> CoreResult<Self> {
        u32::try_from(label)
            .map(Self)
            .map_err(|_| CoreError::InvalidLabel { label })
    }

    /// Build from an already non-negative value.
    pub const fn from_u32(code: u32) -> Self {
        Self(code)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for AreaCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl TryFrom<i64> for AreaCode {
    type Error = CoreError;

    fn try_from(label: i64) -> CoreResult<Self> {
        Self::new(label)
    }
}

impl FromStr for AreaCode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let raw: i64 = s.trim().parse().map_err(|_| CoreError::Parse {
            what: "area code",
            input: s.to_string(),
        })?;
        Self::new(raw)
    }
}

impl fmt::Debug for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AreaCode({})", self.0)
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phone number of a client.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    pub fn new(phone: i64) -> CoreResult<Self> {
        u64::try_from(phone)
            .map(Self)
            .map_err(|_| CoreError::InvalidPhone { phone })
    }

    pub const fn from_u64(phone: u64) -> Self {
        Self(phone)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PhoneNumber {
    fn from(phone: u64) -> Self {
        Self(phone)
    }
}

impl FromStr for PhoneNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let raw: i64 = s.trim().parse().map_err(|_| CoreError::Parse {
            what: "phone number",
            input: s.to_string(),
        })?;
        Self::new(raw)
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that identifies a vertex by its area code.
///
/// Graph operations accept `impl Labeled`, so a bare `AreaCode` and a
/// reference to a station are interchangeable wherever a vertex is expected.
pub trait Labeled {
    fn area_code(&self) -> AreaCode;
}

impl Labeled for AreaCode {
    fn area_code(&self) -> AreaCode {
        *self
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn area_code(&self) -> AreaCode {
        (**self).area_code()
    }
}
