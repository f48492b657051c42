use crate::StrError;
use thiserror::Error;

/// Defines the failure kinds of a stress update
///
/// A failed update never modifies the committed state; the host decides
/// whether to cut the time step and try again.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ChabocheError {
    /// The root solver did not converge within its iteration budget
    #[error("return mapping did not converge after {iterations} iterations (‖F‖ = {norm:e})")]
    NonConvergence { iterations: usize, norm: f64 },

    /// The effective stress (relative to the backstresses) vanished during plastic flow
    #[error("flow direction is undefined because the effective stress vanished")]
    DegenerateFlowDirection,

    /// The denominator nᵀ·D·n of the consistent tangent is not positive
    #[error("consistent tangent correction is singular (nᵀ·D·n = {0:e})")]
    SingularTangentCorrection(f64),

    /// Parameters or inputs are outside their admissible range
    #[error("invalid parameters: {0}")]
    InvalidParameters(StrError),

    /// A linear algebra routine failed
    #[error("numerical failure: {0}")]
    Numerical(StrError),
}

impl From<StrError> for ChabocheError {
    fn from(message: StrError) -> Self {
        ChabocheError::Numerical(message)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ChabocheError;
    use crate::StrError;

    #[test]
    fn display_works() {
        let err = ChabocheError::NonConvergence { iterations: 3, norm: 0.5 };
        assert_eq!(
            format!("{}", err),
            "return mapping did not converge after 3 iterations (‖F‖ = 5e-1)"
        );
        let err = ChabocheError::InvalidParameters("young must be > 0.0");
        assert_eq!(format!("{}", err), "invalid parameters: young must be > 0.0");
    }

    #[test]
    fn from_str_error_works() {
        fn failing() -> Result<(), StrError> {
            Err("matrix is singular")
        }
        fn wrapper() -> Result<(), ChabocheError> {
            failing()?;
            Ok(())
        }
        assert_eq!(wrapper().err(), Some(ChabocheError::Numerical("matrix is singular")));
    }
}
