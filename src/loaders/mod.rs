pub mod sector;
pub mod separation;

pub use sector::SectorProgressLoader;
pub use separation::{SeparationData, SeparationDetailLoader};
