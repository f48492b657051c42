use crate::base::ChabocheError;
use russell_lab::Vector;

/// Defines the residual function F(x) given to the root solver
///
/// The first argument is the output F and the second one is the input x.
pub type ResidualFn<'a> = dyn FnMut(&mut Vector, &Vector) -> Result<(), ChabocheError> + 'a;

/// Holds the outcome of a root-finding run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverOutcome {
    /// Indicates that ‖F(x)‖ reached the tolerance
    pub converged: bool,

    /// Number of iterations performed
    pub iterations: usize,

    /// Max-norm of the residual at the returned x
    pub norm_residual: f64,
}

/// Specifies a multivariate nonlinear root solver F(x) = 0
///
/// Implementations update `x` in place, starting from the initial guess stored
/// in `x`. A run that does not reach the tolerance must return `converged = false`
/// instead of an error; errors are reserved for failures of the residual function
/// or of the linear algebra.
pub trait RootSolver {
    /// Solves F(x) = 0 starting from the initial guess in `x`
    fn solve(&mut self, x: &mut Vector, residual: &mut ResidualFn) -> Result<SolverOutcome, ChabocheError>;
}
