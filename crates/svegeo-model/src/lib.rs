pub mod dataset;
pub mod record;
pub mod report;

pub use dataset::{
    ALL_DATASETS, COUNTIES, DatasetSpec, MUNICIPALITIES, MUNICIPALITY_COUNTY,
    POSTAL_TO_MUNICIPALITY,
};
pub use record::{CountyRecord, MunicipalityCountyRecord, MunicipalityRecord, PostalRecord};
pub use report::{CheckResult, CheckStatus, FileReport, total_failures};
