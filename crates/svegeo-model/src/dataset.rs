/// Static description of one reference CSV file: where it lives relative to
/// the data directory, the exact header it must carry, and the fixed number
/// of data rows it is expected to hold (if any).
#[derive(Debug, Clone, Copy)]
pub struct DatasetSpec {
    pub file_name: &'static str,
    pub header: &'static [&'static str],
    pub expected_rows: Option<usize>,
}

pub const COUNTIES: DatasetSpec = DatasetSpec {
    file_name: "counties.csv",
    header: &["county_code", "county_name", "county_name_short"],
    expected_rows: Some(21),
};

pub const MUNICIPALITIES: DatasetSpec = DatasetSpec {
    file_name: "municipalities.csv",
    header: &[
        "municipality_code",
        "municipality_name",
        "municipality_name_short",
        "county_code",
    ],
    expected_rows: Some(290),
};

pub const MUNICIPALITY_COUNTY: DatasetSpec = DatasetSpec {
    file_name: "municipality_county.csv",
    header: &[
        "municipality_code",
        "municipality_name",
        "municipality_name_short",
        "county_code",
        "county_name",
        "county_name_short",
    ],
    expected_rows: Some(290),
};

pub const POSTAL_TO_MUNICIPALITY: DatasetSpec = DatasetSpec {
    file_name: "postal_to_municipality.csv",
    header: &[
        "postal_code",
        "locality",
        "municipality_code",
        "municipality_name",
    ],
    expected_rows: None,
};

/// All reference datasets in validation order.
pub const ALL_DATASETS: [DatasetSpec; 4] = [
    COUNTIES,
    MUNICIPALITIES,
    MUNICIPALITY_COUNTY,
    POSTAL_TO_MUNICIPALITY,
];
