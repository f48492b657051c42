use crate::base::{ChabocheError, TANGENT_TOL};
use russell_lab::{mat_norm, Norm};
use russell_tensor::{t2_ddot_t4_ddot_t2, t4_ddot_t2_dyad_t2_ddot_t4, Tensor2, Tensor4};

/// Calculates the consistent tangent stiffness
///
/// ```text
///                (D : n) ⊗ (n : D)
/// D_ep = D  -  ------------------
///                   n : D : n
/// ```
///
/// where `n` is the flow direction at the converged state. The result is symmetric
/// because D is symmetric.
///
/// # Input
///
/// * `dd_ep` -- the resulting tangent (Mandel)
/// * `dd` -- the elastic stiffness (Mandel)
/// * `n` -- the flow direction (gradient of σeff)
pub fn consistent_tangent(dd_ep: &mut Tensor4, dd: &Tensor4, n: &Tensor2) -> Result<(), ChabocheError> {
    let den = t2_ddot_t4_ddot_t2(n, dd, n);
    if !den.is_finite() || den <= TANGENT_TOL * mat_norm(dd.matrix(), Norm::Max) {
        return Err(ChabocheError::SingularTangentCorrection(den));
    }
    t4_ddot_t2_dyad_t2_ddot_t4(dd_ep, 1.0, dd, -1.0 / den, n, n);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::consistent_tangent;
    use crate::base::ChabocheError;
    use crate::material::{modulus_to_voigt, stress_to_mandel, LinearElastic};
    use russell_lab::{approx_eq, Matrix, Vector};
    use russell_tensor::{deriv1_invariant_sigma_d, t4_ddot_t2, Mandel, Tensor2, Tensor4};

    #[test]
    fn consistent_tangent_captures_singular_direction() {
        let ela = LinearElastic::new(900.0, 0.25).unwrap();
        let n = Tensor2::new(Mandel::Symmetric);
        let mut dd_ep = Tensor4::new(Mandel::Symmetric);
        assert_eq!(
            consistent_tangent(&mut dd_ep, ela.mandel_modulus(), &n).err(),
            Some(ChabocheError::SingularTangentCorrection(0.0))
        );
    }

    #[test]
    fn consistent_tangent_works_uniaxial() {
        let ela = LinearElastic::new(900.0, 0.25).unwrap(); // μ = λ = 360
        let mu = ela.shear();
        let mut n = Tensor2::new(Mandel::Symmetric);
        n.vector_mut()[0] = 1.0;
        n.vector_mut()[1] = -0.5;
        n.vector_mut()[2] = -0.5;
        let mut dd_ep = Tensor4::new(Mandel::Symmetric);
        consistent_tangent(&mut dd_ep, ela.mandel_modulus(), &n).unwrap();
        let mut res = Matrix::new(6, 6);
        modulus_to_voigt(&mut res, &dd_ep);

        // D n = 2μ n and n : D : n = 3μ
        let dd = ela.modulus();
        let a = [1.0, -0.5, -0.5, 0.0, 0.0, 0.0];
        for i in 0..6 {
            for j in 0..6 {
                let correct = dd.get(i, j) - 4.0 * mu * mu * a[i] * a[j] / (3.0 * mu);
                approx_eq(res.get(i, j), correct, 1e-10);
            }
        }

        // shear stiffness is untouched
        approx_eq(res.get(3, 3), mu, 1e-12);
    }

    #[test]
    fn consistent_tangent_is_symmetric_and_annihilates_the_flow_direction() {
        let ela = LinearElastic::new(200_000.0, 0.3).unwrap();
        let mut stress = Tensor2::new(Mandel::Symmetric);
        stress_to_mandel(&mut stress, &Vector::from(&[120.0, -40.0, 15.0, 30.0, -12.0, 8.0]));
        let mut n = Tensor2::new(Mandel::Symmetric);
        deriv1_invariant_sigma_d(&mut n, &stress).unwrap();
        let mut dd_ep = Tensor4::new(Mandel::Symmetric);
        consistent_tangent(&mut dd_ep, ela.mandel_modulus(), &n).unwrap();
        let mat = dd_ep.matrix();
        for i in 0..6 {
            for j in 0..6 {
                approx_eq(mat.get(i, j), mat.get(j, i), 1e-9);
            }
        }
        // D_ep : n = 0
        let mut res = Tensor2::new(Mandel::Symmetric);
        t4_ddot_t2(&mut res, 1.0, &dd_ep, &n);
        for i in 0..6 {
            approx_eq(res.vector()[i], 0.0, 1e-9);
        }
    }
}
