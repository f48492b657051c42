//! Implements the root-solver capability used by the return mapping

mod newton;
mod root_solver;
pub use crate::solver::newton::*;
pub use crate::solver::root_solver::*;
