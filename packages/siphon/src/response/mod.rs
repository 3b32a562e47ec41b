pub mod core;
mod decode;
mod filter;

pub use self::core::Response;
