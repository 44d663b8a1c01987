mod client;
mod search_url;
pub mod domain;

pub use client::*;
pub use domain::*;
pub use search_url::SearchUrl;
