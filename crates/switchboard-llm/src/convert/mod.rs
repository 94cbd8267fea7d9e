//! Translation between the vendor-neutral request model and wire formats
//!
//! Each submodule owns the complete mapping table for one provider; adding a
//! provider means adding one module here, not scattering per-field logic
//! across call sites. All functions are pure and synchronous.

pub mod anthropic;
