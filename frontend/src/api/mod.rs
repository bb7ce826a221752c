mod auth;
pub mod client;
pub mod credentials;
mod enquiries;
pub mod types;

pub use client::*;
pub use credentials::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
