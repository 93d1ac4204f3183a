pub mod quota;
pub mod sector;
pub mod separation;

pub use quota::{QuotaTable, DEFAULT_QUOTAS};
pub use sector::{SectorRecord, SectorSummary};
pub use separation::{SeparationRecord, SeparationSummary};
