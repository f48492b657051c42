use super::modulus_to_voigt;
use crate::base::{ParamChaboche, NCP};
use crate::StrError;
use russell_lab::Matrix;
use russell_tensor::{t4_ddot_t2, t4_ddot_t2_update, LinElasticity, Mandel, Tensor2, Tensor4};

/// Implements the isotropic linear elastic operator
///
/// The stiffness is held in the Mandel basis (used by the return mapping) and in
/// Voigt notation (handed to the host):
///
/// ```text
///     ┌                                  ┐
///     │ 2μ+λ   λ     λ    0    0    0    │
///     │  λ    2μ+λ   λ    0    0    0    │
/// D = │  λ     λ    2μ+λ  0    0    0    │
///     │  0     0     0    μ    0    0    │
///     │  0     0     0    0    μ    0    │
///     │  0     0     0    0    0    μ    │
///     └                                  ┘
/// ```
///
/// The Voigt matrix maps strain-like vectors (engineering shear) onto stress-like vectors.
#[derive(Clone, Debug)]
pub struct LinearElastic {
    /// Bulk modulus K
    kk: f64,

    /// Shear modulus G (μ)
    gg: f64,

    /// Stiffness tensor (Mandel)
    dd: Tensor4,

    /// Stiffness matrix (Voigt)
    dd_voigt: Matrix,
}

impl LinearElastic {
    /// Allocates a new instance
    pub fn new(young: f64, poisson: f64) -> Result<Self, StrError> {
        if !(young > 0.0) {
            return Err("Young's modulus must be > 0.0");
        }
        if !(poisson > -1.0 && poisson < 0.5) {
            return Err("Poisson's coefficient must satisfy -1.0 < ν < 0.5");
        }
        let model = LinElasticity::new(young, poisson, false, false);
        let (kk, gg) = model.get_bulk_shear();
        let mut dd = Tensor4::new(Mandel::Symmetric);
        dd.set_tensor(1.0, model.get_modulus());
        let mut dd_voigt = Matrix::new(NCP, NCP);
        modulus_to_voigt(&mut dd_voigt, &dd);
        Ok(LinearElastic { kk, gg, dd, dd_voigt })
    }

    /// Allocates a new instance from the model parameters
    pub fn from_param(param: &ParamChaboche) -> Result<Self, StrError> {
        LinearElastic::new(param.young, param.poisson)
    }

    /// Returns the shear modulus μ
    pub fn shear(&self) -> f64 {
        self.gg
    }

    /// Returns Lamé's first parameter λ = K - 2μ/3
    pub fn lambda(&self) -> f64 {
        self.kk - 2.0 * self.gg / 3.0
    }

    /// Returns the bulk modulus K
    pub fn bulk(&self) -> f64 {
        self.kk
    }

    /// Returns an access to the stiffness tensor (Mandel)
    pub fn mandel_modulus(&self) -> &Tensor4 {
        &self.dd
    }

    /// Returns an access to the stiffness matrix (Voigt)
    pub fn modulus(&self) -> &Matrix {
        &self.dd_voigt
    }

    /// Calculates the stress increment Δσ = D : Δε
    pub fn stress_increment(&self, delta_stress: &mut Tensor2, delta_strain: &Tensor2) {
        t4_ddot_t2(delta_stress, 1.0, &self.dd, delta_strain);
    }

    /// Calculates the trial stress σ_trial = σₙ + D : Δε
    pub fn trial_stress(&self, stress_trial: &mut Tensor2, stress: &Tensor2, delta_strain: &Tensor2) {
        stress_trial.set_tensor(1.0, stress);
        t4_ddot_t2_update(stress_trial, 1.0, &self.dd, delta_strain, 1.0); // σ_trial += D : Δε
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
