use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the settings of the return-mapping algorithm and its default solver
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Absolute tolerance on the max-norm of the (scaled) residual vector
    pub tol_residual: f64,

    /// Tolerance on the max-norm of the scaled Newton correction
    pub tol_correction: f64,

    /// Maximum number of Newton iterations
    pub n_max_iterations: usize,

    /// Relative perturbation used to compute the finite-difference Jacobian
    pub fd_step: f64,

    /// Maximum number of step halvings in the backtracking line search
    pub n_max_backtracking: usize,

    /// Prints the Newton iterations to the standard output
    pub verbose: bool,
}

impl Settings {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Settings {
            tol_residual: 1e-9,
            tol_correction: 1e-12,
            n_max_iterations: 200,
            fd_step: 1e-7,
            n_max_backtracking: 8,
            verbose: false,
        }
    }

    /// Sets the tolerance on the residual
    pub fn set_tol_residual(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("tol_residual must be > 0.0");
        }
        self.tol_residual = value;
        Ok(self)
    }

    /// Sets the tolerance on the Newton correction
    pub fn set_tol_correction(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("tol_correction must be > 0.0");
        }
        self.tol_correction = value;
        Ok(self)
    }

    /// Sets the maximum number of iterations
    pub fn set_n_max_iterations(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        self.n_max_iterations = value;
        Ok(self)
    }

    /// Sets the relative step for the finite-difference Jacobian
    pub fn set_fd_step(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0 && value < 1.0) {
            return Err("fd_step must satisfy 0.0 < fd_step < 1.0");
        }
        self.fd_step = value;
        Ok(self)
    }

    /// Sets the maximum number of step halvings in the line search (zero disables it)
    pub fn set_n_max_backtracking(&mut self, value: usize) -> Result<&mut Self, StrError> {
        self.n_max_backtracking = value;
        Ok(self)
    }

    /// Enables printing the Newton iterations
    pub fn set_verbose(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose = flag;
        Ok(self)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Return-mapping settings\n").unwrap();
        write!(f, "=======================\n").unwrap();
        write!(f, "tol_residual = {:?}\n", self.tol_residual).unwrap();
        write!(f, "tol_correction = {:?}\n", self.tol_correction).unwrap();
        write!(f, "n_max_iterations = {}\n", self.n_max_iterations).unwrap();
        write!(f, "fd_step = {:?}\n", self.fd_step).unwrap();
        write!(f, "n_max_backtracking = {}\n", self.n_max_backtracking).unwrap();
        write!(f, "verbose = {}\n", self.verbose).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
