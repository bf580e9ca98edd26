// Adapters layer: presentation of registry contents for terminals and reports.

pub mod console;
pub mod report;
