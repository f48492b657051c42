//! Chaboche viscoplastic stress update at a single integration point
//!
//! The model combines a power-law (Norton) viscoplastic flow rule, saturating isotropic
//! hardening and two nonlinear (Armstrong-Frederick) kinematic hardening terms. Each call
//! integrates one strain increment with a backward-Euler return mapping and returns the
//! staged increments together with the consistent tangent stiffness.
//!
//! The public API uses the Voigt representation of symmetric tensors:
//!
//! ```text
//! stress-like:  [σ11, σ22, σ33, σ12, σ23, σ13]
//! strain-like:  [ε11, ε22, ε33, γ12, γ23, γ13]   with γ = 2 ε
//! ```
//!
//! The return mapping itself works on `russell_tensor` Mandel components.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
pub mod solver;
