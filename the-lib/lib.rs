pub mod action;
pub mod config;
pub mod entry;
pub mod fuzzy;
pub mod highlight;
pub mod host;
pub mod listing;
pub mod mark;
pub mod resolve;
pub mod source;

#[cfg(test)]
mod test_host;

pub use action::delete;
pub use resolve::resolve;
