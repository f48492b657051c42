use super::{consistent_tangent, modulus_to_voigt, strain_to_voigt, stress_to_voigt, unpack_unknowns, von_mises};
use super::{Increments, LinearElastic, MaterialState, ReturnMapping, StressUpdate};
use crate::base::{ChabocheError, ParamChaboche, NCP, N_UNKNOWNS};
use crate::solver::RootSolver;
use russell_lab::{vec_scale, Matrix, Vector};
use russell_tensor::{Mandel, Tensor4};

/// Implements the Chaboche viscoplastic model with two kinematic hardening terms
///
/// The model holds only immutable data and can be shared among threads; each
/// caller provides its own committed state and root solver.
#[derive(Clone, Debug)]
pub struct ChabocheModel {
    /// Holds the parameters
    param: ParamChaboche,

    /// Holds the linear elastic operator
    elastic: LinearElastic,
}

impl ChabocheModel {
    /// Allocates a new instance
    pub fn new(param: &ParamChaboche) -> Result<Self, ChabocheError> {
        param.validate().map_err(ChabocheError::InvalidParameters)?;
        let elastic = LinearElastic::from_param(param).map_err(ChabocheError::InvalidParameters)?;
        Ok(ChabocheModel { param: *param, elastic })
    }

    /// Returns an access to the parameters
    pub fn param(&self) -> &ParamChaboche {
        &self.param
    }

    /// Returns an access to the linear elastic operator
    pub fn elastic(&self) -> &LinearElastic {
        &self.elastic
    }

    /// Allocates a committed state with zero internal variables and the initial yield stress
    pub fn initial_state(&self) -> MaterialState {
        MaterialState::new(&self.param)
    }

    /// Calculates the yield function f = σeq(σ - X₁ - X₂) - R
    pub fn yield_function(&self, state: &MaterialState) -> f64 {
        von_mises(&state.relative_stress()) - state.yield_stress
    }

    /// Calculates the backward-Euler residual for a committed state (see [ReturnMapping])
    ///
    /// The unknowns `x` hold σ, X₁ and X₂ in Mandel components.
    pub fn residual(
        &self,
        ff: &mut Vector,
        x: &Vector,
        state: &MaterialState,
        delta_strain: &Vector,
        dt: f64,
    ) -> Result<(), ChabocheError> {
        let mut rm = ReturnMapping::new(&self.param, &self.elastic, state, delta_strain, dt);
        rm.residual(ff, x)
    }

    /// Integrates the model over a strain increment
    ///
    /// The committed `state` is not modified. On success, the returned [StressUpdate]
    /// holds the staged increments and the tangent; call [StressUpdate::commit] once
    /// the host accepts the global iteration.
    ///
    /// # Input
    ///
    /// * `state` -- the committed state at the beginning of the increment
    /// * `delta_strain` -- the strain increment Δε (strain-like Voigt vector)
    /// * `dt` -- the time increment Δt > 0
    /// * `solver` -- the root solver for the return-mapping system
    pub fn update_stress(
        &self,
        state: &MaterialState,
        delta_strain: &Vector,
        dt: f64,
        solver: &mut dyn RootSolver,
    ) -> Result<StressUpdate, ChabocheError> {
        // check input
        if delta_strain.dim() != NCP {
            return Err(ChabocheError::InvalidParameters("strain increment must have 6 components"));
        }
        if delta_strain.as_data().iter().any(|v| !v.is_finite()) {
            return Err(ChabocheError::InvalidParameters("strain increment must be finite"));
        }
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(ChabocheError::InvalidParameters("time increment Δt must be > 0.0"));
        }
        state.check().map_err(ChabocheError::InvalidParameters)?;

        // trial state
        let mut inc = Increments::new();
        for i in 0..NCP {
            inc.delta_strain[i] = delta_strain[i];
        }
        let mut rm = ReturnMapping::new(&self.param, &self.elastic, state, delta_strain, dt);
        let f_trial = rm.yield_value_trial();

        // elastic update
        if f_trial <= 0.0 {
            log::trace!("elastic increment (f_trial = {:e})", f_trial);
            stress_to_voigt(&mut inc.delta_stress, rm.stress_trial());
            for i in 0..NCP {
                inc.delta_stress[i] -= state.stress[i];
            }
            return Ok(StressUpdate {
                increments: inc,
                tangent: self.elastic.modulus().clone(),
                elastic: true,
                yield_value_trial: f_trial,
                iterations: 0,
                dt,
            });
        }
        log::trace!("viscoplastic increment (f_trial = {:e})", f_trial);

        // return mapping
        let mut x = Vector::new(N_UNKNOWNS);
        rm.initial_guess(&mut x);
        let outcome = solver.solve(&mut x, &mut |ff: &mut Vector, x: &Vector| rm.residual(ff, x))?;
        if !outcome.converged {
            return Err(ChabocheError::NonConvergence {
                iterations: outcome.iterations,
                norm: outcome.norm_residual,
            });
        }

        // consistent tangent at the converged flow direction
        let flow = rm.flow(&x)?;
        let mut dd_ep = Tensor4::new(Mandel::Symmetric);
        consistent_tangent(&mut dd_ep, self.elastic.mandel_modulus(), &flow.n)?;
        let mut tangent = Matrix::new(NCP, NCP);
        modulus_to_voigt(&mut tangent, &dd_ep);

        // increments: Δεp = Δp n (engineering shear)
        strain_to_voigt(&mut inc.delta_plastic_strain, &flow.n);
        vec_scale(&mut inc.delta_plastic_strain, flow.dp);
        inc.delta_p = flow.dp;
        let mut stress = Vector::new(NCP);
        let mut backstress_1 = Vector::new(NCP);
        let mut backstress_2 = Vector::new(NCP);
        let r = unpack_unknowns(&mut stress, &mut backstress_1, &mut backstress_2, &x);
        for i in 0..NCP {
            inc.delta_stress[i] = stress[i] - state.stress[i];
            inc.delta_backstress_1[i] = backstress_1[i] - state.backstress_1[i];
            inc.delta_backstress_2[i] = backstress_2[i] - state.backstress_2[i];
        }
        inc.delta_yield_stress = r - state.yield_stress;
        Ok(StressUpdate {
            increments: inc,
            tangent,
            elastic: false,
            yield_value_trial: f_trial,
            iterations: outcome.iterations,
            dt,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
