// File: crates/marketcap-core/src/dataset.rs
// Summary: The fixed automaker market cap record and the closed set of companies it covers.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::ChartError;

/// Stack id shared by every company except the distinguished one.
pub const OTHERS_STACK: &str = "others";

/// One of the ten companies in the record, in chart order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Company {
    Tesla,
    Toyota,
    Volkswagen,
    Mercedes,
    Bmw,
    Stellantis,
    Gm,
    Ford,
    Honda,
    Hyundai,
}

impl Company {
    pub const ALL: [Company; 10] = [
        Company::Tesla,
        Company::Toyota,
        Company::Volkswagen,
        Company::Mercedes,
        Company::Bmw,
        Company::Stellantis,
        Company::Gm,
        Company::Ford,
        Company::Honda,
        Company::Hyundai,
    ];

    /// The entry whose values are shown in trillions.
    pub const DISTINGUISHED: Company = Company::Tesla;

    /// Name used by the legend and the tooltip.
    pub const fn data_key(self) -> &'static str {
        match self {
            Company::Tesla => "Tesla",
            Company::Toyota => "Toyota",
            Company::Volkswagen => "Volkswagen",
            Company::Mercedes => "Mercedes",
            Company::Bmw => "BMW",
            Company::Stellantis => "Stellantis",
            Company::Gm => "GM",
            Company::Ford => "Ford",
            Company::Honda => "Honda",
            Company::Hyundai => "Hyundai",
        }
    }

    /// Name printed inside the bar label.
    pub const fn label_name(self) -> &'static str {
        match self {
            Company::Volkswagen => "VW",
            other => other.data_key(),
        }
    }

    pub fn fill(self) -> skia::Color {
        let rgb: u32 = match self {
            Company::Tesla => 0xe11d48,
            Company::Toyota => 0xea580c,
            Company::Volkswagen => 0x2563eb,
            Company::Mercedes => 0x0891b2,
            Company::Bmw => 0x0d9488,
            Company::Stellantis => 0x4d7c0f,
            Company::Gm => 0x854d0e,
            Company::Ford => 0x9333ea,
            Company::Honda => 0xbe123c,
            Company::Hyundai => 0x0369a1,
        };
        skia::Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn stack_id(self) -> Option<&'static str> {
        if self == Company::DISTINGUISHED { None } else { Some(OTHERS_STACK) }
    }

    pub fn is_distinguished(self) -> bool {
        self == Company::DISTINGUISHED
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_key())
    }
}

impl FromStr for Company {
    type Err = ChartError;

    /// Accepts either the data key or the label name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Company::ALL
            .into_iter()
            .find(|c| c.data_key().eq_ignore_ascii_case(s) || c.label_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChartError::UnknownCompany(s.to_string()))
    }
}

/// A single category row: company -> market cap in billions of USD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketCapRecord {
    pub category: &'static str,
    pub entries: [(Company, f64); 10],
}

/// The one record the chart shows. Values are approximate as of early 2024.
pub const AUTOMAKERS: MarketCapRecord = MarketCapRecord {
    category: "Automakers",
    entries: [
        (Company::Tesla, 1370.0),
        (Company::Toyota, 230.0),
        (Company::Volkswagen, 120.0),
        (Company::Mercedes, 85.0),
        (Company::Bmw, 75.0),
        (Company::Stellantis, 60.0),
        (Company::Gm, 50.0),
        (Company::Ford, 50.0),
        (Company::Honda, 50.0),
        (Company::Hyundai, 50.0),
    ],
};

impl MarketCapRecord {
    pub fn get(&self, company: Company) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == company)
            .map(|&(_, v)| v)
            .unwrap_or(0.0)
    }

    /// Look up by data key or label name.
    pub fn value_of(&self, name: &str) -> Result<f64, ChartError> {
        name.parse::<Company>().map(|c| self.get(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Company, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entry with the largest value; first wins on ties.
    pub fn largest(&self) -> (Company, f64) {
        self.entries
            .iter()
            .copied()
            .fold(self.entries[0], |best, e| if e.1 > best.1 { e } else { best })
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, v)| v).sum()
    }
}
