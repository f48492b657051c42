use super::{stress_to_mandel, stress_to_voigt, strain_to_mandel, LinearElastic, MaterialState};
use crate::base::{ChabocheError, ParamChaboche, NCP, N_UNKNOWNS, SEFF_TOL};
use russell_lab::Vector;
use russell_tensor::{deriv1_invariant_sigma_d, t2_add, Mandel, Tensor2};

/// Holds the index of the first stress component in the vector of unknowns
pub const I_SIGMA: usize = 0;

/// Holds the index of the yield stress R in the vector of unknowns
pub const I_R: usize = NCP;

/// Holds the index of the first component of X₁ in the vector of unknowns
pub const I_X1: usize = NCP + 1;

/// Holds the index of the first component of X₂ in the vector of unknowns
pub const I_X2: usize = 2 * NCP + 1;

/// Calculates the viscoplastic multiplier increment (Norton law)
///
/// ```text
/// Δp = ⟨(σeff - R) / K⟩ⁿ Δt
/// ```
///
/// A negative overstress yields zero flow (Macaulay bracket).
pub fn viscoplastic_increment(param: &ParamChaboche, seff: f64, r: f64, dt: f64) -> f64 {
    let overstress = (seff - r) / param.kk;
    if overstress <= 0.0 {
        return 0.0;
    }
    f64::powf(overstress, param.nn) * dt
}

/// Holds the viscoplastic flow quantities evaluated at a trial of the unknowns
///
/// Tensors use the Mandel basis.
#[derive(Clone, Debug)]
pub struct Flow {
    /// Relative stress ξ = σ - X₁ - X₂
    pub xi: Tensor2,

    /// Effective stress σeff = σeq(ξ)
    pub seff: f64,

    /// Viscoplastic multiplier increment Δp = ṗ Δt
    pub dp: f64,

    /// Flow direction n = ∂σeff/∂σ = (3/2) dev(ξ) / σeff
    pub n: Tensor2,
}

impl Flow {
    /// Allocates a new instance
    pub fn new() -> Self {
        Flow {
            xi: Tensor2::new(Mandel::Symmetric),
            seff: 0.0,
            dp: 0.0,
            n: Tensor2::new(Mandel::Symmetric),
        }
    }

    /// Calculates the relative stress from the unknowns and returns σeff
    pub fn effective_stress(&mut self, x: &Vector) -> f64 {
        let xi = self.xi.vector_mut();
        for i in 0..NCP {
            xi[i] = x[I_SIGMA + i] - x[I_X1 + i] - x[I_X2 + i];
        }
        self.seff = self.xi.invariant_sigma_d();
        self.seff
    }

    /// Calculates all flow quantities from the vector of unknowns x = [σ, R, X₁, X₂]
    pub fn calculate(&mut self, param: &ParamChaboche, x: &Vector, dt: f64) -> Result<(), ChabocheError> {
        let r = x[I_R];
        let seff = self.effective_stress(x);
        if !(seff > SEFF_TOL * f64::max(1.0, f64::abs(r))) {
            return Err(ChabocheError::DegenerateFlowDirection);
        }
        if deriv1_invariant_sigma_d(&mut self.n, &self.xi).is_none() {
            return Err(ChabocheError::DegenerateFlowDirection);
        }
        self.dp = viscoplastic_increment(param, seff, r, dt);
        Ok(())
    }
}

/// Copies σ, X₁ and X₂ from the unknowns into stress-like Voigt vectors and returns R
pub fn unpack_unknowns(stress: &mut Vector, backstress_1: &mut Vector, backstress_2: &mut Vector, x: &Vector) -> f64 {
    let mut tt = Tensor2::new(Mandel::Symmetric);
    for (voigt, offset) in [(stress, I_SIGMA), (backstress_1, I_X1), (backstress_2, I_X2)] {
        for i in 0..NCP {
            tt.vector_mut()[i] = x[offset + i];
        }
        stress_to_voigt(voigt, &tt);
    }
    x[I_R]
}

/// Sets the unknowns from σ, R, X₁ and X₂ given as stress-like Voigt vectors
pub fn pack_unknowns(x: &mut Vector, stress: &Vector, r: f64, backstress_1: &Vector, backstress_2: &Vector) {
    let mut tt = Tensor2::new(Mandel::Symmetric);
    for (voigt, offset) in [(stress, I_SIGMA), (backstress_1, I_X1), (backstress_2, I_X2)] {
        stress_to_mandel(&mut tt, voigt);
        for i in 0..NCP {
            x[offset + i] = tt.vector()[i];
        }
    }
    x[I_R] = r;
}

/// Implements the backward-Euler system of the Chaboche model over one strain increment
///
/// The unknowns are `x = [σ(6), R(1), X₁(6), X₂(6)]` with the tensors in the Mandel
/// basis, and the residual reads:
///
/// ```text
/// f₁ = σₙ - σ + D : (Δε - Δp n)
/// f₂ = Rₙ - R + b (Q - R) Δp
/// f₃ = X₁ₙ - X₁ + (2/3) C₁ Δp n - D₁ Δp X₁
/// f₄ = X₂ₙ - X₂ + (2/3) C₂ Δp n - D₂ Δp X₂
/// ```
///
/// The committed state and the strain increment are converted from Voigt notation once,
/// at construction.
pub struct ReturnMapping<'a> {
    /// Holds the parameters
    param: &'a ParamChaboche,

    /// Holds the elastic operator
    elastic: &'a LinearElastic,

    /// Holds the time increment Δt
    dt: f64,

    /// Holds the committed σₙ
    stress_n: Tensor2,

    /// Holds the committed X₁ₙ
    backstress_1_n: Tensor2,

    /// Holds the committed X₂ₙ
    backstress_2_n: Tensor2,

    /// Holds the committed Rₙ
    yield_stress_n: f64,

    /// Holds the strain increment Δε
    delta_strain: Tensor2,

    /// Holds the trial stress σₙ + D : Δε
    stress_trial: Tensor2,

    /// Holds the flow quantities of the last evaluation
    flow: Flow,

    /// Auxiliary Δε - Δp n
    delta_elastic_strain: Tensor2,

    /// Auxiliary D : (Δε - Δp n)
    delta_stress: Tensor2,
}

impl<'a> ReturnMapping<'a> {
    /// Allocates a new instance for a committed state and a strain increment (strain-like Voigt)
    pub fn new(
        param: &'a ParamChaboche,
        elastic: &'a LinearElastic,
        state: &MaterialState,
        delta_strain: &Vector,
        dt: f64,
    ) -> Self {
        let mandel = Mandel::Symmetric;
        let mut stress_n = Tensor2::new(mandel);
        let mut backstress_1_n = Tensor2::new(mandel);
        let mut backstress_2_n = Tensor2::new(mandel);
        let mut deps = Tensor2::new(mandel);
        let mut stress_trial = Tensor2::new(mandel);
        stress_to_mandel(&mut stress_n, &state.stress);
        stress_to_mandel(&mut backstress_1_n, &state.backstress_1);
        stress_to_mandel(&mut backstress_2_n, &state.backstress_2);
        strain_to_mandel(&mut deps, delta_strain);
        elastic.trial_stress(&mut stress_trial, &stress_n, &deps);
        ReturnMapping {
            param,
            elastic,
            dt,
            stress_n,
            backstress_1_n,
            backstress_2_n,
            yield_stress_n: state.yield_stress,
            delta_strain: deps,
            stress_trial,
            flow: Flow::new(),
            delta_elastic_strain: Tensor2::new(mandel),
            delta_stress: Tensor2::new(mandel),
        }
    }

    /// Returns the trial stress (Mandel)
    pub fn stress_trial(&self) -> &Tensor2 {
        &self.stress_trial
    }

    /// Sets the initial guess x₀ = [σ_trial, Rₙ, X₁ₙ, X₂ₙ]
    pub fn initial_guess(&self, x: &mut Vector) {
        assert_eq!(x.dim(), N_UNKNOWNS);
        let (sig, x1, x2) = (
            self.stress_trial.vector(),
            self.backstress_1_n.vector(),
            self.backstress_2_n.vector(),
        );
        for i in 0..NCP {
            x[I_SIGMA + i] = sig[i];
            x[I_X1 + i] = x1[i];
            x[I_X2 + i] = x2[i];
        }
        x[I_R] = self.yield_stress_n;
    }

    /// Calculates the yield function at the trial state f = σeq(σ_trial - X₁ₙ - X₂ₙ) - Rₙ
    pub fn yield_value_trial(&mut self) -> f64 {
        let mut x = Vector::new(N_UNKNOWNS);
        self.initial_guess(&mut x);
        self.flow.effective_stress(&x) - self.yield_stress_n
    }

    /// Calculates the flow quantities at x
    pub fn flow(&mut self, x: &Vector) -> Result<&Flow, ChabocheError> {
        self.flow.calculate(self.param, x, self.dt)?;
        Ok(&self.flow)
    }

    /// Calculates the residual F(x)
    pub fn residual(&mut self, ff: &mut Vector, x: &Vector) -> Result<(), ChabocheError> {
        assert_eq!(ff.dim(), N_UNKNOWNS);
        assert_eq!(x.dim(), N_UNKNOWNS);
        let param = self.param;

        // flow quantities
        self.flow.calculate(param, x, self.dt)?;
        let dp = self.flow.dp;

        // elastic stress increment: D : (Δε - Δp n)
        t2_add(&mut self.delta_elastic_strain, 1.0, &self.delta_strain, -dp, &self.flow.n);
        self.elastic
            .stress_increment(&mut self.delta_stress, &self.delta_elastic_strain);

        // stress-strain compatibility and kinematic hardening
        let sig_n = self.stress_n.vector();
        let x1_n = self.backstress_1_n.vector();
        let x2_n = self.backstress_2_n.vector();
        let dsig = self.delta_stress.vector();
        let n = self.flow.n.vector();
        for i in 0..NCP {
            let x1 = x[I_X1 + i];
            let x2 = x[I_X2 + i];
            ff[I_SIGMA + i] = sig_n[i] - x[I_SIGMA + i] + dsig[i];
            ff[I_X1 + i] = x1_n[i] - x1 + (2.0 / 3.0) * param.c1 * dp * n[i] - param.d1 * dp * x1;
            ff[I_X2 + i] = x2_n[i] - x2 + (2.0 / 3.0) * param.c2 * dp * n[i] - param.d2 * dp * x2;
        }

        // isotropic hardening
        let r = x[I_R];
        ff[I_R] = self.yield_stress_n - r + param.b * (param.qq - r) * dp;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
