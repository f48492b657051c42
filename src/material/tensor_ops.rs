use crate::base::NCP;
use russell_lab::{Matrix, Vector};
use russell_tensor::{Mandel, Tensor2, Tensor4, SQRT_2};

/// Holds the factors converting stress-like Voigt components into Mandel components
///
/// Strain-like Voigt vectors carry the engineering shear γ = 2ε, thus they are
/// divided by these factors instead.
const VOIGT_TO_MANDEL: [f64; NCP] = [1.0, 1.0, 1.0, SQRT_2, SQRT_2, SQRT_2];

/// Converts a stress-like Voigt vector into a Mandel tensor
pub fn stress_to_mandel(tt: &mut Tensor2, stress: &Vector) {
    let vec = tt.vector_mut();
    for i in 0..NCP {
        vec[i] = stress[i] * VOIGT_TO_MANDEL[i];
    }
}

/// Converts a strain-like Voigt vector (engineering shear) into a Mandel tensor
pub fn strain_to_mandel(tt: &mut Tensor2, strain: &Vector) {
    let vec = tt.vector_mut();
    for i in 0..NCP {
        vec[i] = strain[i] / VOIGT_TO_MANDEL[i];
    }
}

/// Converts a Mandel tensor into a stress-like Voigt vector
pub fn stress_to_voigt(stress: &mut Vector, tt: &Tensor2) {
    let vec = tt.vector();
    for i in 0..NCP {
        stress[i] = vec[i] / VOIGT_TO_MANDEL[i];
    }
}

/// Converts a Mandel tensor into a strain-like Voigt vector (engineering shear)
pub fn strain_to_voigt(strain: &mut Vector, tt: &Tensor2) {
    let vec = tt.vector();
    for i in 0..NCP {
        strain[i] = vec[i] * VOIGT_TO_MANDEL[i];
    }
}

/// Converts a Mandel fourth-order tensor into the Voigt matrix mapping strain-like onto stress-like vectors
///
/// ```text
/// D_voigt[i][j] = D_mandel[i][j] / (fᵢ fⱼ)    with f = [1, 1, 1, √2, √2, √2]
/// ```
pub fn modulus_to_voigt(dd_voigt: &mut Matrix, dd: &Tensor4) {
    let mat = dd.matrix();
    for i in 0..NCP {
        for j in 0..NCP {
            dd_voigt.set(i, j, mat.get(i, j) / (VOIGT_TO_MANDEL[i] * VOIGT_TO_MANDEL[j]));
        }
    }
}

/// Calculates the von Mises equivalent stress of a stress-like Voigt vector
pub fn von_mises(stress: &Vector) -> f64 {
    let mut tt = Tensor2::new(Mandel::Symmetric);
    stress_to_mandel(&mut tt, stress);
    tt.invariant_sigma_d()
}

/// Calculates the equivalent (von Mises) strain of a strain-like Voigt vector
///
/// ```text
/// εeq = √((2/3) e : e)    with e = dev(ε)
/// ```
pub fn equivalent_strain(strain: &Vector) -> f64 {
    let mut tt = Tensor2::new(Mandel::Symmetric);
    strain_to_mandel(&mut tt, strain);
    tt.invariant_eps_d()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
