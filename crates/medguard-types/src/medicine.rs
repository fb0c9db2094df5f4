use crate::ValueError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A canonical medicine identifier with case-insensitive identity.
///
/// The input is trimmed of leading and trailing whitespace during construction. The trimmed
/// spelling is kept for display, while equality, ordering and hashing use a case-folded key,
/// so `"Aspirin"`, `"aspirin"` and `"  ASPIRIN "` all name the same medicine.
#[derive(Debug, Clone)]
pub struct MedicineName {
    display: String,
    key: String,
}

impl MedicineName {
    /// Creates a new `MedicineName` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(MedicineName)` if the trimmed input is non-empty,
    /// or `Err(ValueError::EmptyName)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ValueError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValueError::EmptyName);
        }
        Ok(Self {
            display: trimmed.to_owned(),
            key: trimmed.to_lowercase(),
        })
    }

    /// Returns the name as it was spelled when constructed (trimmed).
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Returns the case-folded lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for MedicineName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for MedicineName {}

impl Hash for MedicineName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for MedicineName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MedicineName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for MedicineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl AsRef<str> for MedicineName {
    fn as_ref(&self) -> &str {
        &self.display
    }
}

impl serde::Serialize for MedicineName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.display)
    }
}

impl<'de> serde::Deserialize<'de> for MedicineName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MedicineName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// An ordered, deduplicated list of medicines.
///
/// Order is first-occurrence order. Pushing a name that is already present (under
/// case-insensitive identity) is a no-op, and the first spelling is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct MedicineList(Vec<MedicineName>);

impl MedicineList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Validates and deduplicates a sequence of raw names.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyName` if any entry is empty after trimming. No partial list is
    /// produced in that case.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.push(MedicineName::new(name)?);
        }
        Ok(list)
    }

    /// Appends `name` unless an equal name is already present.
    ///
    /// Returns `true` if the name was added.
    pub fn push(&mut self, name: MedicineName) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn contains(&self, name: &MedicineName) -> bool {
        self.0.iter().any(|existing| existing == name)
    }

    pub fn as_slice(&self) -> &[MedicineName] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MedicineName> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<MedicineName> for MedicineList {
    fn from_iter<T: IntoIterator<Item = MedicineName>>(iter: T) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.push(name);
        }
        list
    }
}

impl<'a> IntoIterator for &'a MedicineList {
    type Item = &'a MedicineName;
    type IntoIter = std::slice::Iter<'a, MedicineName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[MedicineName]> for MedicineList {
    fn as_ref(&self) -> &[MedicineName] {
        &self.0
    }
}
