// Output formatting — terminal display and CSV export.

pub mod csv_export;
pub mod terminal;
