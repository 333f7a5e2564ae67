pub mod celebration;
pub mod constants;
pub mod error;
pub mod persistence;
pub mod segments;
pub mod spin;
pub mod spin_request;
pub mod store;
pub mod teams;
pub mod theme;
pub mod validation;
