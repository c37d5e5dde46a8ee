mod consolidation_report;

pub use consolidation_report::ConsolidationReport;
