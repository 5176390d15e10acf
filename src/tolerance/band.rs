use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Coarse grouping of a band, in increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Tolerance,
    Action,
}

/// The five discrete outcome bands, low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    #[serde(rename = "act_low")]
    ActLow,
    #[serde(rename = "tol_low")]
    TolLow,
    #[serde(rename = "ok")]
    WithinTol,
    #[serde(rename = "tol_high")]
    TolHigh,
    #[serde(rename = "act_high")]
    ActHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownBand;

impl Band {
    pub const ALL: [Band; 5] = [
        Band::ActLow,
        Band::TolLow,
        Band::WithinTol,
        Band::TolHigh,
        Band::ActHigh,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Band::ActLow => "act_low",
            Band::TolLow => "tol_low",
            Band::WithinTol => "ok",
            Band::TolHigh => "tol_high",
            Band::ActHigh => "act_high",
        }
    }

    #[inline]
    pub const fn severity(self) -> Severity {
        match self {
            Band::WithinTol => Severity::Ok,
            Band::TolLow | Band::TolHigh => Severity::Tolerance,
            Band::ActLow | Band::ActHigh => Severity::Action,
        }
    }
}

impl Severity {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Tolerance => "tolerance",
            Severity::Action => "action",
        }
    }

    /// Short prefix used in result messages, e.g. `OK(1.2)`.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Tolerance => "TOL",
            Severity::Action => "ACT",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown band")
    }
}

impl std::error::Error for UnknownBand {}

impl FromStr for Band {
    type Err = UnknownBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "act_low" => Ok(Band::ActLow),
            "tol_low" => Ok(Band::TolLow),
            "ok" => Ok(Band::WithinTol),
            "tol_high" => Ok(Band::TolHigh),
            "act_high" => Ok(Band::ActHigh),
            _ => Err(UnknownBand),
        }
    }
}
