use chaboche::material::von_mises;
use chaboche::prelude::*;
use russell_lab::{approx_eq, Vector};

// Monotonic loading of a single material point
//
// TEST GOAL
//
// Verifies the rate sensitivity of the model and the plastic flow direction
// along strain-driven monotonic paths.
//
// LOADING
//
// * Uniaxial stress: ε₁₁ = ε, ε₂₂ = ε₃₃ = -ν ε, up to ε = 0.011 in 40 increments
// * Pure shear: γ₁₂ = γ, up to γ = 0.011 in 40 increments
//
// PARAMETERS
//
// * E = 200000, ν = 0.3, K = 100, n = 10
// * C₁ = C₂ = 5000, D₁ = D₂ = 50, Q = 50, b = 10, R₀ = 100

const N_STEPS: usize = 40;
const STRAIN_MAX: f64 = 0.011;

fn uniaxial_path(poisson: f64, strain_rate: f64) -> Result<LoadingPath, StrError> {
    let mut path = LoadingPath::new();
    let de = STRAIN_MAX / (N_STEPS as f64);
    let dt = de / strain_rate;
    for k in 1..(N_STEPS + 1) {
        let eps = (k as f64) * de;
        let strain = Vector::from(&[eps, -poisson * eps, -poisson * eps, 0.0, 0.0, 0.0]);
        path.push_strain(&strain, (k as f64) * dt)?;
    }
    Ok(path)
}

#[test]
fn test_chaboche_monotonic_rate_sensitivity() -> Result<(), ChabocheError> {
    let param = ParamChaboche::sample();
    let model = ChabocheModel::new(&param)?;
    let mut solver = NewtonSolver::new(&Settings::new());

    // run the same path at three strain rates
    let mut final_stress = Vec::new();
    for strain_rate in [1e-5, 1e-3, 1e-1] {
        let path = uniaxial_path(param.poisson, strain_rate)?;
        let states = path.follow_strain(&model, &mut solver)?;
        let last = states.last().unwrap();
        println!("\nstrain rate = {:e}\n{:.4}", strain_rate, last);

        // overstress follows the Norton law at every viscoplastic increment
        for k in 1..states.len() {
            let dp = states[k].cumulative_plastic_strain - states[k - 1].cumulative_plastic_strain;
            assert!(dp >= 0.0);
            if dp > 0.0 {
                let dt = path.deltas_time[k - 1];
                let overstress = von_mises(&states[k].relative_stress()) - states[k].yield_stress;
                let correct = param.kk * f64::powf(dp / dt, 1.0 / param.nn);
                approx_eq(overstress, correct, 1e-6 * correct);
            }
        }

        // isotropic hardening goes from R₀ toward Q
        for k in 1..states.len() {
            assert!(states[k].yield_stress <= states[k - 1].yield_stress);
            assert!(states[k].yield_stress > param.qq);
        }

        // uniaxial plastic flow: εp₂₂ = εp₃₃ = -εp₁₁/2 and εp₁₁ = p
        approx_eq(last.plastic_strain[0], last.cumulative_plastic_strain, 1e-10);
        approx_eq(last.plastic_strain[1], -0.5 * last.plastic_strain[0], 1e-10);
        approx_eq(last.plastic_strain[2], -0.5 * last.plastic_strain[0], 1e-10);
        final_stress.push(last.stress[0]);
    }

    // faster loading gives higher stress
    assert!(final_stress[0] < final_stress[1]);
    assert!(final_stress[1] < final_stress[2]);
    Ok(())
}

#[test]
fn test_chaboche_monotonic_pure_shear() -> Result<(), ChabocheError> {
    let param = ParamChaboche::sample();
    let model = ChabocheModel::new(&param)?;
    let mut solver = NewtonSolver::new(&Settings::new());

    let mut path = LoadingPath::new();
    let dg = STRAIN_MAX / (N_STEPS as f64);
    for k in 1..(N_STEPS + 1) {
        let strain = Vector::from(&[0.0, 0.0, 0.0, (k as f64) * dg, 0.0, 0.0]);
        path.push_strain(&strain, k as f64)?;
    }
    let states = path.follow_strain(&model, &mut solver)?;
    let last = states.last().unwrap();
    println!("\n{:.4}", last);
    assert!(last.cumulative_plastic_strain > 0.0);

    // only the shear components are active
    for state in &states {
        for i in [0, 1, 2, 4, 5] {
            assert!(f64::abs(state.stress[i]) < 1e-9);
            assert!(f64::abs(state.plastic_strain[i]) < 1e-12);
            assert!(f64::abs(state.backstress_1[i]) < 1e-9);
        }
    }

    // engineering plastic shear strain: γp = √3 p
    approx_eq(last.plastic_strain[3], f64::sqrt(3.0) * last.cumulative_plastic_strain, 1e-10);

    // the first increment is elastic: τ = μ Δγ = 21.15 < R₀/√3
    let mu = model.elastic().shear();
    assert!(states[1].elastic);
    approx_eq(states[1].stress[3], mu * dg, 1e-9);
    Ok(())
}
