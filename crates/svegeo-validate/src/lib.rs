mod checks;
mod payload;
mod stages;

pub use checks::{
    FK_PREVIEW, ROW_PREVIEW, check_code_format, check_county_join_consistency, check_foreign_key,
    check_header, check_lf_line_endings, check_municipality_county_prefix,
    check_municipality_join_consistency, check_no_duplicates, check_no_empty_rows,
    check_no_trailing_commas, check_postal_name_consistency, check_row_count, check_utf8_no_bom,
};
pub use payload::{
    REPORT_SCHEMA, REPORT_SCHEMA_VERSION, ValidationPayload, write_report_json,
};
pub use stages::{
    CountyStage, MunicipalityStage, validate_counties, validate_municipalities,
    validate_municipality_county, validate_postal,
};
