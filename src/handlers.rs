mod common;
mod tweets;

pub use common::{health, root};
pub use tweets::get_tweets;
