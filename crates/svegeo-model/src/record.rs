//! Typed rows for the four reference files.
//!
//! Code fields are kept as strings throughout; leading zeros are significant
//! and codes must never be parsed as integers.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyRecord {
    pub county_code: String,
    pub county_name: String,
    pub county_name_short: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityRecord {
    pub municipality_code: String,
    pub municipality_name: String,
    pub municipality_name_short: String,
    pub county_code: String,
}

/// Denormalized join of county and municipality rows. The name columns are
/// copies whose source of truth is the stand-alone files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MunicipalityCountyRecord {
    pub municipality_code: String,
    pub municipality_name: String,
    pub municipality_name_short: String,
    pub county_code: String,
    pub county_name: String,
    pub county_name_short: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalRecord {
    pub postal_code: String,
    pub locality: String,
    pub municipality_code: String,
    pub municipality_name: String,
}
