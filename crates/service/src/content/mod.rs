//! The portfolio content store and the read model derived from it.

pub mod collections;
pub mod store;
pub mod view;

pub use store::ContentStore;
pub use view::{GroupKey, PortfolioView, ProjectGroup};
