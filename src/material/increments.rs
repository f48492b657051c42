use super::{HistoryEntry, HistoryValue, MaterialState};
use crate::base::{KEY_TANGENT, NCP};
use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Holds the increments computed by a stress update (not yet committed)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Increments {
    /// Holds Δσ
    pub delta_stress: Vector,

    /// Holds Δε (the input strain increment)
    pub delta_strain: Vector,

    /// Holds Δεp = Δp M n (strain-like)
    pub delta_plastic_strain: Vector,

    /// Holds the viscoplastic multiplier increment Δp
    pub delta_p: f64,

    /// Holds ΔR
    pub delta_yield_stress: f64,

    /// Holds ΔX₁
    pub delta_backstress_1: Vector,

    /// Holds ΔX₂
    pub delta_backstress_2: Vector,
}

/// Holds the result of a successful stress update
#[derive(Clone, Debug)]
pub struct StressUpdate {
    /// Holds the staged increments
    pub increments: Increments,

    /// Holds the elastic or consistent tangent stiffness (6×6)
    pub tangent: Matrix,

    /// Indicates that the increment was purely elastic
    pub elastic: bool,

    /// Holds the yield function value at the trial state
    pub yield_value_trial: f64,

    /// Holds the number of iterations of the root solver (zero if elastic)
    pub iterations: usize,

    /// Holds the time increment Δt
    pub dt: f64,
}

impl Increments {
    /// Allocates a new instance with zero increments
    pub fn new() -> Self {
        Increments {
            delta_stress: Vector::new(NCP),
            delta_strain: Vector::new(NCP),
            delta_plastic_strain: Vector::new(NCP),
            delta_p: 0.0,
            delta_yield_stress: 0.0,
            delta_backstress_1: Vector::new(NCP),
            delta_backstress_2: Vector::new(NCP),
        }
    }

    /// Indicates that all plastic increments are exactly zero
    pub fn no_plastic_flow(&self) -> bool {
        self.delta_p == 0.0
            && self.delta_yield_stress == 0.0
            && self.delta_plastic_strain.as_data().iter().all(|v| *v == 0.0)
            && self.delta_backstress_1.as_data().iter().all(|v| *v == 0.0)
            && self.delta_backstress_2.as_data().iter().all(|v| *v == 0.0)
    }
}

impl StressUpdate {
    /// Returns the end time of the increment given the committed state
    pub fn time_end(&self, state: &MaterialState) -> f64 {
        state.time + self.dt
    }

    /// Commits the increments onto a copy of the committed state
    ///
    /// ```text
    /// σ  += Δσ      ε  += Δε      εp += Δεp     p += Δp
    /// X₁ += ΔX₁     X₂ += ΔX₂     R  += ΔR
    /// ```
    pub fn commit(&self, state: &MaterialState) -> MaterialState {
        let inc = &self.increments;
        let mut next = state.clone();
        for i in 0..NCP {
            next.stress[i] += inc.delta_stress[i];
            next.strain[i] += inc.delta_strain[i];
            next.plastic_strain[i] += inc.delta_plastic_strain[i];
            next.backstress_1[i] += inc.delta_backstress_1[i];
            next.backstress_2[i] += inc.delta_backstress_2[i];
        }
        next.cumulative_plastic_strain += inc.delta_p;
        next.yield_stress += inc.delta_yield_stress;
        next.elastic = self.elastic;
        next.time = self.time_end(state);
        next
    }

    /// Commits the increments and returns the entries for the host to persist
    ///
    /// The entries of the new state are followed by the tangent, all tagged
    /// with the end time of the increment.
    pub fn history(&self, state: &MaterialState) -> Vec<HistoryEntry> {
        let next = self.commit(state);
        let rows: Vec<Vec<f64>> = (0..NCP)
            .map(|i| (0..NCP).map(|j| self.tangent.get(i, j)).collect::<Vec<_>>())
            .collect();
        let mut entries = next.history();
        entries.push(HistoryEntry {
            key: KEY_TANGENT,
            time: next.time,
            value: HistoryValue::Matrix(rows),
        });
        entries
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Increments, StressUpdate};
    use crate::base::{ParamChaboche, KEY_TANGENT};
    use crate::material::{HistoryValue, MaterialState};
    use russell_lab::Matrix;

    #[test]
    fn commit_adds_increments() {
        let state = MaterialState::new(&ParamChaboche::sample());
        let mut inc = Increments::new();
        assert!(inc.no_plastic_flow());
        inc.delta_stress[0] = 10.0;
        inc.delta_strain[0] = 1e-3;
        inc.delta_plastic_strain[0] = 2e-4;
        inc.delta_p = 2e-4;
        inc.delta_yield_stress = 0.5;
        inc.delta_backstress_1[1] = -1.0;
        inc.delta_backstress_2[2] = -2.0;
        assert!(!inc.no_plastic_flow());
        let update = StressUpdate {
            increments: inc,
            tangent: Matrix::new(6, 6),
            elastic: false,
            yield_value_trial: 1.0,
            iterations: 3,
            dt: 0.5,
        };
        let first = update.commit(&state);
        let second = update.commit(&first);
        assert_eq!(second.stress[0], 20.0);
        assert_eq!(second.strain[0], 2e-3);
        assert_eq!(second.plastic_strain[0], 4e-4);
        assert_eq!(second.backstress_1[1], -2.0);
        assert_eq!(second.backstress_2[2], -4.0);
        assert_eq!(second.yield_stress, 101.0);
        assert_eq!(second.time, 1.0);
        assert!(!second.elastic);

        // the cumulative plastic strain accumulates Δp (not its own value)
        assert_eq!(first.cumulative_plastic_strain, 2e-4);
        assert_eq!(second.cumulative_plastic_strain, 4e-4);

        // the committed state is left untouched
        assert_eq!(state.stress[0], 0.0);
        assert_eq!(state.cumulative_plastic_strain, 0.0);
    }

    #[test]
    fn history_includes_tangent() {
        let state = MaterialState::new(&ParamChaboche::sample());
        let mut tangent = Matrix::new(6, 6);
        tangent.set(0, 1, 3.0);
        let update = StressUpdate {
            increments: Increments::new(),
            tangent,
            elastic: true,
            yield_value_trial: -1.0,
            iterations: 0,
            dt: 0.25,
        };
        let entries = update.history(&state);
        assert_eq!(entries.len(), 8);
        let last = entries.last().unwrap();
        assert_eq!(last.key, KEY_TANGENT);
        assert_eq!(last.time, 0.25);
        match &last.value {
            HistoryValue::Matrix(rows) => {
                assert_eq!(rows.len(), 6);
                assert_eq!(rows[0][1], 3.0);
                assert_eq!(rows[1][0], 0.0);
            }
            _ => panic!("tangent must be a matrix"),
        }
        for entry in &entries {
            assert_eq!(entry.time, 0.25);
        }
    }
}
