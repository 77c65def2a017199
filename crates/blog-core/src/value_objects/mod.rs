//! Value objects - immutable types that represent domain concepts

mod ids;
mod page;

pub use ids::{IdParseError, PostId, ProfileId, UserId};
pub use page::{num_pages, Page, PageNumber, PageRequest, POSTS_PER_PAGE};
