use std::collections::HashMap;

/// Water charges keyed by unit identifier.
///
/// Built once per batch and only read afterwards. Keys match exactly: no
/// case folding, no zero-padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaterIndex {
    charges: HashMap<String, String>,
}

impl WaterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a charge. A later insert for the same unit wins.
    pub fn insert(&mut self, unit: impl Into<String>, charge: impl Into<String>) -> Option<String> {
        self.charges.insert(unit.into(), charge.into())
    }

    pub fn get(&self, unit: &str) -> Option<&str> {
        self.charges.get(unit).map(String::as_str)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.charges.contains_key(unit)
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for WaterIndex
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = WaterIndex::new();
        for (unit, charge) in iter {
            index.insert(unit, charge);
        }
        index
    }
}
