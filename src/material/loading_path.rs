use super::{ChabocheModel, MaterialState};
use crate::base::{ChabocheError, NCP};
use crate::solver::RootSolver;
use crate::StrError;
use russell_lab::Vector;

/// Holds a strain-driven loading path for a single material point
///
/// The path stores total strains at given times; the increments between
/// consecutive points drive the stress update.
pub struct LoadingPath {
    /// Holds the total strains (strain-like Voigt vectors)
    pub strains: Vec<Vector>,

    /// Holds the times
    pub times: Vec<f64>,

    /// Holds all Δε
    pub deltas_strain: Vec<Vector>,

    /// Holds all Δt
    pub deltas_time: Vec<f64>,
}

impl LoadingPath {
    /// Allocates a new instance starting at zero strain and time
    pub fn new() -> Self {
        LoadingPath {
            strains: vec![Vector::new(NCP)],
            times: vec![0.0],
            deltas_strain: Vec::new(),
            deltas_time: Vec::new(),
        }
    }

    /// Generates a uniaxial strain-driven cycle with lateral elastic contraction
    ///
    /// The axial strain goes `0 → +amplitude → -amplitude → 0` for each cycle
    /// and the lateral strains are `-ν ε₁₁`.
    ///
    /// # Input
    ///
    /// * `poisson` -- Poisson's coefficient for the lateral strains
    /// * `amplitude` -- the axial strain amplitude
    /// * `n_quarter` -- number of increments in a quarter of a cycle
    /// * `n_cycles` -- number of cycles
    /// * `strain_rate` -- the absolute axial strain rate (> 0)
    pub fn new_uniaxial_cyclic(
        poisson: f64,
        amplitude: f64,
        n_quarter: usize,
        n_cycles: usize,
        strain_rate: f64,
    ) -> Result<Self, StrError> {
        if n_quarter < 1 {
            return Err("n_quarter must be ≥ 1");
        }
        if !(strain_rate > 0.0) {
            return Err("strain_rate must be > 0.0");
        }
        let mut path = LoadingPath::new();
        let de = amplitude / (n_quarter as f64);
        let dt = f64::abs(de) / strain_rate;
        let mut eps = Vector::new(NCP);
        let mut time = 0.0;
        for _ in 0..n_cycles {
            for sign in [1.0, -1.0, -1.0, 1.0] {
                for _ in 0..n_quarter {
                    eps[0] += sign * de;
                    eps[1] = -poisson * eps[0];
                    eps[2] = -poisson * eps[0];
                    time += dt;
                    path.push_strain(&eps, time)?;
                }
            }
        }
        Ok(path)
    }

    /// Pushes a new total strain reached at the given time
    pub fn push_strain(&mut self, strain: &Vector, time: f64) -> Result<&mut Self, StrError> {
        if strain.dim() != NCP {
            return Err("strain must have 6 components");
        }
        let (Some(strain_prev), Some(&time_prev)) = (self.strains.last(), self.times.last()) else {
            return Err("path must start with an initial strain and time");
        };
        if !(time > time_prev) {
            return Err("time must increase along the path");
        }
        let mut delta = Vector::new(NCP);
        for i in 0..NCP {
            delta[i] = strain[i] - strain_prev[i];
        }
        self.deltas_strain.push(delta);
        self.deltas_time.push(time - time_prev);
        self.strains.push(strain.clone());
        self.times.push(time);
        Ok(self)
    }

    /// Runs the stress update along the path, committing every increment
    ///
    /// Returns all committed states, starting with the initial one.
    pub fn follow_strain(
        &self,
        model: &ChabocheModel,
        solver: &mut dyn RootSolver,
    ) -> Result<Vec<MaterialState>, ChabocheError> {
        let mut state = model.initial_state();
        let mut states = Vec::with_capacity(self.deltas_strain.len() + 1);
        for (delta_strain, dt) in self.deltas_strain.iter().zip(&self.deltas_time) {
            let update = model.update_stress(&state, delta_strain, *dt, solver)?;
            let next = update.commit(&state);
            states.push(state);
            state = next;
        }
        states.push(state);
        Ok(states)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
