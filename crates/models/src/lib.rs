//! Portfolio content model: the persisted snapshot shape, its defaults, the
//! partial form read back from storage, and upsert payloads.

pub mod errors;
pub mod portfolio;
pub mod defaults;
pub mod partial;
pub mod input;

pub use defaults::default_portfolio;
pub use errors::ModelError;
pub use input::{ContactLinkInput, ProjectInput, StackIconInput};
pub use partial::PartialPortfolioState;
pub use portfolio::{
    Collection, ContactIcon, ContactLink, Keyed, PortfolioState, ProfileField, Project, SectionKey,
    SectionTitles, StackIcon, STORAGE_KEY,
};
