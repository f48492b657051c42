//! Implements the base structures: parameters, settings, errors and host interfaces

mod constants;
mod errors;
mod field_query;
mod parameters;
mod settings;
pub use crate::base::constants::*;
pub use crate::base::errors::*;
pub use crate::base::field_query::*;
pub use crate::base::parameters::*;
pub use crate::base::settings::*;
