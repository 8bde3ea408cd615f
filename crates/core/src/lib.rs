pub mod site;
pub mod types;

pub use site::{BASE_URL, pages};
pub use types::{ChangeFreq, Page};
