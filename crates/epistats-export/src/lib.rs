pub mod columns;
pub mod error;
pub mod format;
pub mod row;
pub mod writer;

pub use columns::{
    CASE_EXPORT_COLUMNS, ExportAudience, ExportColumn, column_names, project, visible_columns,
};
pub use error::{ExportError, Result};
pub use row::{
    CaseDetails, CaseExportRow, EpiDetails, HospitalizationDetails, PersonDetails,
    VaccinationDetails,
};
pub use writer::{csv_string, write_csv};
