use super::{ResidualFn, RootSolver, SolverOutcome};
use crate::base::{ChabocheError, Settings};
use russell_lab::{solve_lin_sys, vec_norm, Matrix, Norm, Vector};

/// Holds the sufficient-decrease coefficient of the Armijo condition
const ARMIJO_C: f64 = 1e-4;

/// Implements a Newton-Raphson solver with finite-difference Jacobian and backtracking
///
/// The Jacobian is computed by central differences with the perturbation
/// `h = fd_step · max(1, |xⱼ|)`. Each Newton direction is followed by a
/// backtracking line search on `φ = ½ ‖F‖²`; trial points where the residual
/// function reports a degenerate flow direction are treated as `φ = ∞`.
#[derive(Clone, Debug)]
pub struct NewtonSolver {
    /// Holds the settings
    settings: Settings,

    /// Holds the number of residual evaluations of the last run
    n_function_evaluations: usize,
}

impl NewtonSolver {
    /// Allocates a new instance
    pub fn new(settings: &Settings) -> Self {
        NewtonSolver {
            settings: *settings,
            n_function_evaluations: 0,
        }
    }

    /// Returns the number of residual evaluations performed during the last run
    pub fn n_function_evaluations(&self) -> usize {
        self.n_function_evaluations
    }

    /// Computes the Jacobian matrix by central differences
    fn jacobian(&mut self, jj: &mut Matrix, x: &Vector, residual: &mut ResidualFn) -> Result<(), ChabocheError> {
        let n = x.dim();
        let mut x_pert = x.clone();
        let mut ff_plus = Vector::new(n);
        let mut ff_minus = Vector::new(n);
        for j in 0..n {
            let h = self.settings.fd_step * f64::max(1.0, f64::abs(x[j]));
            x_pert[j] = x[j] + h;
            residual(&mut ff_plus, &x_pert)?;
            x_pert[j] = x[j] - h;
            residual(&mut ff_minus, &x_pert)?;
            x_pert[j] = x[j];
            self.n_function_evaluations += 2;
            for i in 0..n {
                jj.set(i, j, (ff_plus[i] - ff_minus[i]) / (2.0 * h));
            }
        }
        Ok(())
    }

    /// Prints the header of the iterations table
    fn print_header(&self) {
        if self.settings.verbose {
            println!("{:>4}{:>14}{:>10}", "it", "‖F‖∞", "α");
        }
    }

    /// Prints a row of the iterations table
    fn print_row(&self, iteration: usize, norm: f64, alpha: f64) {
        if self.settings.verbose {
            println!("{:>4}{:>14.6e}{:>10.4}", iteration, norm, alpha);
        }
    }
}

impl RootSolver for NewtonSolver {
    fn solve(&mut self, x: &mut Vector, residual: &mut ResidualFn) -> Result<SolverOutcome, ChabocheError> {
        let n = x.dim();
        let mut ff = Vector::new(n);
        let mut ff_trial = Vector::new(n);
        let mut x_trial = Vector::new(n);
        let mut mdx = Vector::new(n);
        let mut jj = Matrix::new(n, n);

        // residual at the initial guess
        self.n_function_evaluations = 1;
        residual(&mut ff, x)?;
        let mut norm = vec_norm(&ff, Norm::Max);
        self.print_header();
        self.print_row(0, norm, 0.0);

        let mut iterations = 0;
        for iteration in 0..self.settings.n_max_iterations {
            // check convergence
            iterations = iteration;
            if !norm.is_finite() {
                log::warn!("Newton: found non-finite residual at iteration {}", iteration);
                break;
            }
            if norm < self.settings.tol_residual {
                log::debug!("Newton: converged after {} iterations (‖F‖ = {:e})", iteration, norm);
                return Ok(SolverOutcome {
                    converged: true,
                    iterations: iteration,
                    norm_residual: norm,
                });
            }

            // Newton direction: J · δx = -F
            self.jacobian(&mut jj, x, residual)?;
            for i in 0..n {
                mdx[i] = -ff[i];
            }
            solve_lin_sys(&mut mdx, &mut jj)?;

            // backtracking line search on φ = ½ ‖F‖²
            let phi_0 = 0.5 * ff.as_data().iter().map(|v| v * v).sum::<f64>();
            let mut alpha = 1.0;
            let mut accepted = false;
            for k in 0..=self.settings.n_max_backtracking {
                for i in 0..n {
                    x_trial[i] = x[i] + alpha * mdx[i];
                }
                self.n_function_evaluations += 1;
                let phi = match residual(&mut ff_trial, &x_trial) {
                    Ok(()) => 0.5 * ff_trial.as_data().iter().map(|v| v * v).sum::<f64>(),
                    Err(ChabocheError::DegenerateFlowDirection) => f64::INFINITY,
                    Err(e) => return Err(e),
                };
                let last = k == self.settings.n_max_backtracking;
                if phi.is_finite() && (phi <= (1.0 - 2.0 * ARMIJO_C * alpha) * phi_0 || last) {
                    accepted = true;
                    break;
                }
                alpha *= 0.5;
            }
            if !accepted {
                log::warn!("Newton: line search failed at iteration {}", iteration);
                break;
            }

            // stagnation check
            let norm_dx = alpha * vec_norm(&mdx, Norm::Max);
            let norm_x = vec_norm(&x_trial, Norm::Max);

            // update
            for i in 0..n {
                x[i] = x_trial[i];
                ff[i] = ff_trial[i];
            }
            norm = vec_norm(&ff, Norm::Max);
            self.print_row(iteration + 1, norm, alpha);
            log::debug!("Newton: it = {}, ‖F‖ = {:e}, α = {}", iteration + 1, norm, alpha);
            iterations = iteration + 1;

            if norm >= self.settings.tol_residual && norm_dx < self.settings.tol_correction * (1.0 + norm_x) {
                log::warn!("Newton: stagnated at iteration {} (‖F‖ = {:e})", iteration + 1, norm);
                return Ok(SolverOutcome {
                    converged: false,
                    iterations: iteration + 1,
                    norm_residual: norm,
                });
            }
        }

        // final check (the last update may have reached the tolerance)
        let converged = norm < self.settings.tol_residual;
        if !converged {
            log::warn!("Newton: did not converge after {} iterations (‖F‖ = {:e})", iterations, norm);
        }
        Ok(SolverOutcome {
            converged,
            iterations,
            norm_residual: norm,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
