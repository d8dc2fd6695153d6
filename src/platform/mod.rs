mod error;
mod fetch;
mod model;
pub mod traits;

pub use error::*;
pub use fetch::HttpMediaFetcher;
pub use model::*;
pub use traits::{MediaFetcher, VideoResolver};

pub use tiktok::TikwmResolver;

pub mod tiktok;
