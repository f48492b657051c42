//! Makes available common structures needed to run a stress update
//!
//! You may write `use chaboche::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ChabocheError, FieldQuery, ParamChaboche, Settings, DEFAULT_TEST_DIR, PARAM_NAMES};
pub use crate::material::{ChabocheModel, HistoryEntry, HistoryValue, LoadingPath, MaterialState, StressUpdate};
pub use crate::solver::{NewtonSolver, RootSolver, SolverOutcome};
pub use crate::StrError;
