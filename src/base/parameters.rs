use super::{ChabocheError, FieldQuery};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the parameters of the Chaboche viscoplastic model
///
/// The viscoplastic multiplier rate follows the Norton power law:
///
/// ```text
/// ṗ = ⟨(σeff - R) / K⟩ⁿ
/// ```
///
/// with isotropic hardening `Ṙ = b (Q - R) ṗ` and two kinematic hardening terms
/// `Ẋᵢ = (2/3) Cᵢ ṗ n - Dᵢ ṗ Xᵢ`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamChaboche {
    /// Young's modulus E
    pub young: f64,

    /// Poisson's coefficient ν
    pub poisson: f64,

    /// Viscoplastic consistency (drag stress) K
    pub kk: f64,

    /// Viscoplastic exponent n
    pub nn: f64,

    /// Kinematic hardening modulus C₁
    pub c1: f64,

    /// Kinematic hardening recall coefficient D₁
    pub d1: f64,

    /// Kinematic hardening modulus C₂
    pub c2: f64,

    /// Kinematic hardening recall coefficient D₂
    pub d2: f64,

    /// Isotropic hardening saturation Q
    pub qq: f64,

    /// Isotropic hardening rate b
    pub b: f64,

    /// Initial yield stress (initial value of R)
    pub yield_stress: f64,
}

/// Holds the names used to query the model parameters from the host
pub const PARAM_NAMES: [&str; 11] = [
    "Young's modulus",
    "Poisson ratio",
    "viscoplastic consistency",
    "viscoplastic exponent",
    "kinematic hardening C1",
    "kinematic hardening D1",
    "kinematic hardening C2",
    "kinematic hardening D2",
    "isotropic hardening Q",
    "isotropic hardening b",
    "initial yield stress",
];

impl ParamChaboche {
    /// Returns sample parameters (steel-like, MPa and seconds)
    pub fn sample() -> Self {
        ParamChaboche {
            young: 200_000.0,
            poisson: 0.3,
            kk: 100.0,
            nn: 10.0,
            c1: 5000.0,
            d1: 50.0,
            c2: 5000.0,
            d2: 50.0,
            qq: 50.0,
            b: 10.0,
            yield_stress: 100.0,
        }
    }

    /// Reads the parameters from the host and validates them
    ///
    /// # Input
    ///
    /// * `query` -- the host's field query
    /// * `point` -- index of the integration point
    /// * `time` -- time at which the parameters are requested
    pub fn from_query(query: &dyn FieldQuery, point: usize, time: f64) -> Result<Self, ChabocheError> {
        let mut values = [0.0; 11];
        for (value, name) in values.iter_mut().zip(PARAM_NAMES) {
            *value = query.value(name, point, time).map_err(ChabocheError::InvalidParameters)?;
        }
        let param = ParamChaboche {
            young: values[0],
            poisson: values[1],
            kk: values[2],
            nn: values[3],
            c1: values[4],
            d1: values[5],
            c2: values[6],
            d2: values[7],
            qq: values[8],
            b: values[9],
            yield_stress: values[10],
        };
        param.validate().map_err(ChabocheError::InvalidParameters)?;
        Ok(param)
    }

    /// Checks that the parameters are admissible
    pub fn validate(&self) -> Result<(), StrError> {
        if !(self.young > 0.0) {
            return Err("Young's modulus must be > 0.0");
        }
        if !(self.poisson > -1.0 && self.poisson < 0.5) {
            return Err("Poisson's coefficient must satisfy -1.0 < ν < 0.5");
        }
        if !(self.kk > 0.0) {
            return Err("viscoplastic consistency K must be > 0.0");
        }
        if !(self.nn > 0.0) {
            return Err("viscoplastic exponent n must be > 0.0");
        }
        if !(self.c1 >= 0.0 && self.c2 >= 0.0) {
            return Err("kinematic hardening moduli C₁ and C₂ must be ≥ 0.0");
        }
        if !(self.d1 >= 0.0 && self.d2 >= 0.0) {
            return Err("kinematic hardening recall coefficients D₁ and D₂ must be ≥ 0.0");
        }
        if !(self.b >= 0.0) || !self.qq.is_finite() {
            return Err("isotropic hardening requires b ≥ 0.0 and a finite Q");
        }
        if !(self.yield_stress > 0.0) {
            return Err("initial yield stress must be > 0.0");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
