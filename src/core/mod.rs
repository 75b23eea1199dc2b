//! Core domain types: platform selection, toolchain location, errors.

pub mod errors;
pub mod platform;
pub mod toolchain;

pub use errors::BootstrapError;
pub use platform::{HostOs, PlatformProfile};
pub use toolchain::NdkToolchain;
