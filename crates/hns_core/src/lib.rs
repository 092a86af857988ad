pub mod error;
pub mod types;

pub use error::Error;
pub use types::{RenderBlock, RenderedSummary, SummaryFeed, SummaryRecord};
pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::types::{RenderBlock, RenderedSummary, SummaryFeed, SummaryRecord};
    pub use crate::{Error, Result};
}
