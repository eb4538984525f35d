pub mod export_service;
pub mod summary_service;

pub use export_service::ExportService;
pub use summary_service::{BalanceStatus, MonthlyTotal, SummaryService};
