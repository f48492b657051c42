/// Defines an auxiliary directory where the test result files (e.g., figures) are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/chaboche/test";

/// Holds the number of components of a symmetric tensor in Voigt notation
pub const NCP: usize = 6;

/// Holds the number of unknowns of the return-mapping system: σ(6), R(1), X1(6), X2(6)
pub const N_UNKNOWNS: usize = 3 * NCP + 1;

/// Holds the relative tolerance to detect a vanishing effective stress
pub const SEFF_TOL: f64 = 1e-12;

/// Holds the relative tolerance to detect a vanishing denominator in the consistent tangent
pub const TANGENT_TOL: f64 = 1e-12;

/// History key for the stress vector
pub const KEY_STRESS: &str = "stress";

/// History key for the total strain vector
pub const KEY_STRAIN: &str = "strain";

/// History key for the plastic strain vector
pub const KEY_PLASTIC_STRAIN: &str = "plastic strain";

/// History key for the cumulative equivalent plastic strain
pub const KEY_CUMULATIVE_PLASTIC_STRAIN: &str = "cumulative equivalent plastic strain";

/// History key for the first backstress
pub const KEY_BACKSTRESS_1: &str = "backstress 1";

/// History key for the second backstress
pub const KEY_BACKSTRESS_2: &str = "backstress 2";

/// History key for the yield stress (isotropic hardening variable)
pub const KEY_YIELD_STRESS: &str = "yield stress";

/// History key for the elastic or consistent tangent stiffness
pub const KEY_TANGENT: &str = "tangent";
