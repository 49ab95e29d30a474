pub mod layout;
pub mod viewer;

pub use layout::{page, titled};
