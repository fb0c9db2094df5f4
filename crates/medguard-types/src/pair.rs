use crate::{MedicineName, ValueError};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator used when a pair is rendered as text (`"A ↔ B"`).
pub const PAIR_SEPARATOR: char = '\u{2194}';

/// An unordered pair of two distinct medicines.
///
/// Equality and hashing are symmetric, so `(A, B)` and `(B, A)` are the same key. The
/// construction order is remembered only for display: [`DrugPairKey::first`] is the medicine
/// that was passed first, and the `Display` impl renders `"<first> ↔ <second>"`.
#[derive(Debug, Clone)]
pub struct DrugPairKey {
    first: MedicineName,
    second: MedicineName,
}

impl DrugPairKey {
    /// Creates a pair from two medicines.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::SameMedicine` if both arguments name the same medicine.
    pub fn new(first: MedicineName, second: MedicineName) -> Result<Self, ValueError> {
        if first == second {
            return Err(ValueError::SameMedicine(first.as_str().to_owned()));
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &MedicineName {
        &self.first
    }

    pub fn second(&self) -> &MedicineName {
        &self.second
    }

    // Lower key first, so both orientations produce the same tuple.
    fn canonical(&self) -> (&str, &str) {
        let (a, b) = (self.first.key(), self.second.key());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl PartialEq for DrugPairKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for DrugPairKey {}

impl Hash for DrugPairKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for DrugPairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, PAIR_SEPARATOR, self.second)
    }
}
