pub mod layout;
pub mod migrate;
pub mod resolve;
