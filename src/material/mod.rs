//! Implements the Chaboche model and its building blocks

mod chaboche;
mod consistent_tangent;
mod increments;
mod linear_elastic;
mod loading_path;
mod local_state;
mod residual;
mod tensor_ops;
pub use crate::material::chaboche::*;
pub use crate::material::consistent_tangent::*;
pub use crate::material::increments::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::loading_path::*;
pub use crate::material::local_state::*;
pub use crate::material::residual::*;
pub use crate::material::tensor_ops::*;
