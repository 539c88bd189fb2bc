use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::utils::{eq_ignore_ascii_case, trim_ascii};

/**
    Coarse outcome of every provider operation.

    This is the closed set of results visible at the API boundary. Numeric
    values are fixed so they can be passed across process or language
    boundaries unchanged:

    - **Success** (0)
    - **Unexpected** (1): anything not covered below
    - **InvalidParameter** (2): bad size, missing or malformed input
    - **OutOfMemory** (3): allocation or internal sizing failure
*/
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Success = 0,
    Unexpected = 1,
    InvalidParameter = 2,
    OutOfMemory = 3,
}

impl Status {
    pub const fn from_u32(u: u32) -> Option<Self> {
        match u {
            0 => Some(Self::Success),
            1 => Some(Self::Unexpected),
            2 => Some(Self::InvalidParameter),
            3 => Some(Self::OutOfMemory),
            _ => None,
        }
    }

    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            7 if eq_ignore_ascii_case(name, b"success") => Some(Self::Success),
            16 if eq_ignore_ascii_case(name, b"error_unexpected") => Some(Self::Unexpected),
            23 if eq_ignore_ascii_case(name, b"error_invalid_parameter") => {
                Some(Self::InvalidParameter)
            }
            19 if eq_ignore_ascii_case(name, b"error_out_of_memory") => Some(Self::OutOfMemory),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Unexpected => "ERROR_UNEXPECTED",
            Self::InvalidParameter => "ERROR_INVALID_PARAMETER",
            Self::OutOfMemory => "ERROR_OUT_OF_MEMORY",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "status",
            value: s.to_owned(),
        })
    }
}

impl From<Status> for u32 {
    fn from(status: Status) -> Self {
        status.to_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_are_stable() {
        assert_eq!(Status::Success.to_u32(), 0);
        assert_eq!(Status::Unexpected.to_u32(), 1);
        assert_eq!(Status::InvalidParameter.to_u32(), 2);
        assert_eq!(Status::OutOfMemory.to_u32(), 3);
        assert_eq!(Status::from_u32(4), None);
    }

    #[test]
    fn u32_round_trip() {
        for val in 0u32..4 {
            assert_eq!(Status::from_u32(val).unwrap().to_u32(), val);
        }
    }

    #[test]
    fn name_round_trip() {
        for status in [
            Status::Success,
            Status::Unexpected,
            Status::InvalidParameter,
            Status::OutOfMemory,
        ] {
            let parsed = Status::from_name(status.to_name().as_bytes()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(
            " error_invalid_parameter ".parse::<Status>().unwrap(),
            Status::InvalidParameter
        );
        let err = "ERROR_TIMEOUT".parse::<Status>().unwrap_err();
        assert_eq!(err.kind, "status");
    }

    #[test]
    fn only_success_is_success() {
        assert!(Status::Success.is_success());
        assert!(!Status::OutOfMemory.is_success());
    }
}
