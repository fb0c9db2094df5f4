use crate::ValueError;
use std::fmt;

/// A patient age in whole years, limited to `0..=PatientAge::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientAge(u8);

impl PatientAge {
    /// Upper bound accepted for a patient age.
    pub const MAX: u8 = 130;

    /// Validates an age given in whole years.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::AgeOutOfRange` for negative ages and ages above [`PatientAge::MAX`].
    pub fn new(years: i64) -> Result<Self, ValueError> {
        match u8::try_from(years) {
            Ok(y) if y <= Self::MAX => Ok(Self(y)),
            _ => Err(ValueError::AgeOutOfRange(years)),
        }
    }

    pub fn years(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PatientAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for PatientAge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientAge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let years = i64::deserialize(deserializer)?;
        PatientAge::new(years).map_err(serde::de::Error::custom)
    }
}
