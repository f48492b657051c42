use crate::base::{ParamChaboche, NCP};
use crate::base::{KEY_BACKSTRESS_1, KEY_BACKSTRESS_2, KEY_CUMULATIVE_PLASTIC_STRAIN};
use crate::base::{KEY_PLASTIC_STRAIN, KEY_STRAIN, KEY_STRESS, KEY_YIELD_STRESS};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the committed state of the Chaboche model at a single integration point
///
/// Vectors use the Voigt notation; strain-like vectors carry the engineering shear.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialState {
    /// Holds the stress σ
    pub stress: Vector,

    /// Holds the total strain ε
    pub strain: Vector,

    /// Holds the plastic strain εp
    pub plastic_strain: Vector,

    /// Holds the cumulative equivalent plastic strain p (non-decreasing)
    pub cumulative_plastic_strain: f64,

    /// Holds the first backstress X₁
    pub backstress_1: Vector,

    /// Holds the second backstress X₂
    pub backstress_2: Vector,

    /// Holds the yield stress R (isotropic hardening variable)
    pub yield_stress: f64,

    /// Indicates that the last committed increment was elastic
    pub elastic: bool,

    /// Holds the end time of the last committed increment
    pub time: f64,
}

/// Holds a value to be stored by the host under a history key
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HistoryValue {
    Scalar(f64),
    Voigt(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
}

/// Holds a named value tagged with the time of the increment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub key: &'static str,
    pub time: f64,
    pub value: HistoryValue,
}

impl MaterialState {
    /// Allocates a new instance with zero internal variables and the initial yield stress
    pub fn new(param: &ParamChaboche) -> Self {
        MaterialState {
            stress: Vector::new(NCP),
            strain: Vector::new(NCP),
            plastic_strain: Vector::new(NCP),
            cumulative_plastic_strain: 0.0,
            backstress_1: Vector::new(NCP),
            backstress_2: Vector::new(NCP),
            yield_stress: param.yield_stress,
            elastic: true,
            time: 0.0,
        }
    }

    /// Checks that all vectors have 6 components and that all values are finite
    pub fn check(&self) -> Result<(), StrError> {
        for (v, err_dim) in [
            (&self.stress, "state: stress must have 6 components"),
            (&self.strain, "state: strain must have 6 components"),
            (&self.plastic_strain, "state: plastic strain must have 6 components"),
            (&self.backstress_1, "state: backstress X₁ must have 6 components"),
            (&self.backstress_2, "state: backstress X₂ must have 6 components"),
        ] {
            if v.dim() != NCP {
                return Err(err_dim);
            }
            if v.as_data().iter().any(|x| !x.is_finite()) {
                return Err("state: all components must be finite");
            }
        }
        if !self.yield_stress.is_finite() || !self.cumulative_plastic_strain.is_finite() {
            return Err("state: all components must be finite");
        }
        Ok(())
    }

    /// Returns the relative stress σ - X₁ - X₂
    pub fn relative_stress(&self) -> Vector {
        let mut xi = Vector::new(NCP);
        for i in 0..NCP {
            xi[i] = self.stress[i] - self.backstress_1[i] - self.backstress_2[i];
        }
        xi
    }

    /// Returns the named values for the host to persist
    pub fn history(&self) -> Vec<HistoryEntry> {
        let voigt = |key, v: &Vector| HistoryEntry {
            key,
            time: self.time,
            value: HistoryValue::Voigt(v.as_data().clone()),
        };
        let scalar = |key, s: f64| HistoryEntry {
            key,
            time: self.time,
            value: HistoryValue::Scalar(s),
        };
        vec![
            voigt(KEY_STRESS, &self.stress),
            voigt(KEY_STRAIN, &self.strain),
            voigt(KEY_PLASTIC_STRAIN, &self.plastic_strain),
            scalar(KEY_CUMULATIVE_PLASTIC_STRAIN, self.cumulative_plastic_strain),
            voigt(KEY_BACKSTRESS_1, &self.backstress_1),
            voigt(KEY_BACKSTRESS_2, &self.backstress_2),
            scalar(KEY_YIELD_STRESS, self.yield_stress),
        ]
    }
}

impl fmt::Display for MaterialState {
    /// Returns a nicely formatted string representing the state
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        write_voigt(f, "σ", &self.stress, prec)?;
        write_voigt(f, "ε", &self.strain, prec)?;
        write_voigt(f, "εp", &self.plastic_strain, prec)?;
        write_voigt(f, "X₁", &self.backstress_1, prec)?;
        write_voigt(f, "X₂", &self.backstress_2, prec)?;
        write!(f, "p = {:.*}\n", prec, self.cumulative_plastic_strain)?;
        write!(f, "R = {:.*}", prec, self.yield_stress)
    }
}

/// Writes a Voigt vector as a single row
fn write_voigt(f: &mut fmt::Formatter<'_>, name: &str, v: &Vector, prec: usize) -> fmt::Result {
    write!(f, "{} = [", name)?;
    for i in 0..NCP {
        let sep = if i == 0 { "" } else { ", " };
        write!(f, "{}{:.*}", sep, prec, v[i])?;
    }
    write!(f, "]\n")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
