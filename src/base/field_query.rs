use crate::StrError;

/// Defines the host's access to named field values at integration points
///
/// The host finite element code implements this trait to give the material model
/// access to constants (e.g., "Young's modulus") and history values.
pub trait FieldQuery {
    /// Returns the value of a named field at an integration point and time
    fn value(&self, name: &str, point: usize, time: f64) -> Result<f64, StrError>;
}

impl<F> FieldQuery for F
where
    F: Fn(&str, usize, f64) -> Result<f64, StrError>,
{
    fn value(&self, name: &str, point: usize, time: f64) -> Result<f64, StrError> {
        self(name, point, time)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
