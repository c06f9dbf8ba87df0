pub mod cart;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod price;
pub mod product;
pub mod session;
pub mod share;
pub mod toast;

pub use error::{Error, Result};
