use chaboche::material::von_mises;
use chaboche::prelude::*;
use russell_lab::{approx_eq, Vector};

// Strain-controlled uniaxial cycles
//
// TEST GOAL
//
// Verifies the hardening laws and the flow rule under load reversals.
//
// LOADING
//
// ε₁₁: 0 → +0.0045 → -0.0045 → 0, three times, with ε₂₂ = ε₃₃ = -ν ε₁₁
// 8 increments per quarter cycle at a strain rate of 1e-3/s
//
// PARAMETERS
//
// * E = 200000, ν = 0.3, K = 100, n = 10
// * C₁ = C₂ = 5000, D₁ = D₂ = 50, Q = 50, b = 10, R₀ = 100

const AMPLITUDE: f64 = 0.0045;
const N_QUARTER: usize = 8;
const N_CYCLES: usize = 3;
const STRAIN_RATE: f64 = 1e-3;

fn trace(v: &Vector) -> f64 {
    v[0] + v[1] + v[2]
}

#[test]
fn test_chaboche_cyclic() -> Result<(), ChabocheError> {
    let param = ParamChaboche::sample();
    let model = ChabocheModel::new(&param)?;
    let settings = Settings::new();
    let mut solver = NewtonSolver::new(&settings);
    let path = LoadingPath::new_uniaxial_cyclic(param.poisson, AMPLITUDE, N_QUARTER, N_CYCLES, STRAIN_RATE)?;
    let states = path.follow_strain(&model, &mut solver)?;
    assert_eq!(states.len(), 4 * N_QUARTER * N_CYCLES + 1);

    let mut n_plastic = 0;
    for k in 1..states.len() {
        let (prev, curr) = (&states[k - 1], &states[k]);
        let dp = curr.cumulative_plastic_strain - prev.cumulative_plastic_strain;

        // p never decreases
        assert!(dp >= 0.0);
        if curr.elastic {
            assert_eq!(dp, 0.0);
        } else {
            n_plastic += 1;
        }

        // plastic flow is isochoric
        assert!(f64::abs(trace(&curr.plastic_strain)) < 1e-12);

        // backstresses stay within the Armstrong-Frederick limit C/D
        assert!(von_mises(&curr.backstress_1) <= (param.c1 / param.d1) * (1.0 + 1e-9));
        assert!(von_mises(&curr.backstress_2) <= (param.c2 / param.d2) * (1.0 + 1e-9));

        // backstresses are deviatoric
        assert!(f64::abs(trace(&curr.backstress_1)) < 1e-7);
        assert!(f64::abs(trace(&curr.backstress_2)) < 1e-7);

        // yield stress moves monotonically toward Q
        assert!(curr.yield_stress <= prev.yield_stress);
        assert!(curr.yield_stress > param.qq);

        // time is accumulated
        approx_eq(curr.time, path.times[k], 1e-12);
    }
    assert!(n_plastic > 0);

    // load reversals: tension at the peaks and compression at the valleys
    for cycle in 0..N_CYCLES {
        let peak = &states[(4 * cycle + 1) * N_QUARTER];
        let valley = &states[(4 * cycle + 3) * N_QUARTER];
        approx_eq(peak.strain[0], AMPLITUDE, 1e-14);
        approx_eq(valley.strain[0], -AMPLITUDE, 1e-14);
        assert!(peak.stress[0] > param.yield_stress * 0.5);
        assert!(valley.stress[0] < -param.yield_stress * 0.5);
        assert!(peak.backstress_1[0] > 0.0);
        assert!(valley.backstress_1[0] < 0.0);
    }

    // history output at the end of the path
    let last = states.last().unwrap();
    let history = last.history();
    assert_eq!(history.len(), 7);
    for entry in &history {
        approx_eq(entry.time, last.time, 1e-15);
    }
    assert_eq!(history[3].value, HistoryValue::Scalar(last.cumulative_plastic_strain));
    Ok(())
}
