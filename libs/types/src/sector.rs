//! Sector taxonomy for listed companies
//!
//! The exchange reports company sectors and sub-indices under different
//! display names. `Sector` carries both so the name-to-label mapping lives
//! in one place and is total over the enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A company sector name the exchange does not list under.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sector name: {0}")]
pub struct UnknownSector(pub String);

/// The thirteen sectors companies list under.
///
/// Serializes as the exact sector-name string the company list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Commercial Banks")]
    CommercialBanks,
    #[serde(rename = "Development Banks")]
    DevelopmentBanks,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Hotels And Tourism")]
    HotelsAndTourism,
    #[serde(rename = "Hydro Power")]
    HydroPower,
    #[serde(rename = "Investment")]
    Investment,
    #[serde(rename = "Life Insurance")]
    LifeInsurance,
    #[serde(rename = "Manufacturing And Processing")]
    ManufacturingAndProcessing,
    #[serde(rename = "Microfinance")]
    Microfinance,
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    #[serde(rename = "Non Life Insurance")]
    NonLifeInsurance,
    #[serde(rename = "Others")]
    Others,
    #[serde(rename = "Tradings")]
    Tradings,
}

impl Sector {
    /// Every known sector, in display order.
    pub const ALL: [Sector; 13] = [
        Sector::CommercialBanks,
        Sector::DevelopmentBanks,
        Sector::Finance,
        Sector::HotelsAndTourism,
        Sector::HydroPower,
        Sector::Investment,
        Sector::LifeInsurance,
        Sector::ManufacturingAndProcessing,
        Sector::Microfinance,
        Sector::MutualFund,
        Sector::NonLifeInsurance,
        Sector::Others,
        Sector::Tradings,
    ];

    /// The sector name as it appears in the company list.
    pub fn name(&self) -> &'static str {
        match self {
            Sector::CommercialBanks => "Commercial Banks",
            Sector::DevelopmentBanks => "Development Banks",
            Sector::Finance => "Finance",
            Sector::HotelsAndTourism => "Hotels And Tourism",
            Sector::HydroPower => "Hydro Power",
            Sector::Investment => "Investment",
            Sector::LifeInsurance => "Life Insurance",
            Sector::ManufacturingAndProcessing => "Manufacturing And Processing",
            Sector::Microfinance => "Microfinance",
            Sector::MutualFund => "Mutual Fund",
            Sector::NonLifeInsurance => "Non Life Insurance",
            Sector::Others => "Others",
            Sector::Tradings => "Tradings",
        }
    }

    /// The display label of the sub-index tracking this sector.
    ///
    /// Sub-index labels do not follow the sector names one-for-one; this
    /// mapping matches the labels the sub-indices feed reports.
    pub fn sub_index_label(&self) -> &'static str {
        match self {
            Sector::CommercialBanks => "Banking SubIndex",
            Sector::DevelopmentBanks => "Development Bank Index",
            Sector::Finance => "Finance Index",
            Sector::HotelsAndTourism => "Hotels And Tourism Index",
            Sector::HydroPower => "HydroPower Index",
            Sector::Investment => "Investment Index",
            Sector::LifeInsurance => "Life Insurance",
            Sector::ManufacturingAndProcessing => "Manufacturing And Processing",
            Sector::Microfinance => "Microfinance Index",
            Sector::MutualFund => "Mutual Fund",
            Sector::NonLifeInsurance => "Non Life Insurance",
            Sector::Others => "Others Index",
            Sector::Tradings => "Trading Index",
        }
    }
}

impl FromStr for Sector {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .iter()
            .find(|sector| sector.name() == s)
            .copied()
            .ok_or_else(|| UnknownSector(s.to_string()))
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
