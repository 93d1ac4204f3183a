use std::collections::HashMap;

/// Built-in daily separation quotas per sector. Overridable through the
/// settings file; codes absent from the table report a quota of zero.
pub const DEFAULT_QUOTAS: &[(&str, f64)] = &[
    ("10", 59.0),
    ("11", 76.0),
    ("12", 112.0),
    ("13", 84.0),
    ("14", 93.0),
    ("15", 82.0),
    ("20", 30.0),
    ("21", 45.0),
    ("39", 42.0),
    ("44", 64.0),
    ("50", 0.0),
    ("52", 23.0),
    ("53", 184.0),
    ("58", 60.0),
    ("60", 68.0),
    ("ARMI-2", 0.0),
    ("ARMI-3", 0.0),
    ("ARMFRAC", 0.0),
    ("SETOR24", 0.0),
];

/// Immutable sector-code to quota lookup, injected into the sector loader.
#[derive(Debug, Clone)]
pub struct QuotaTable {
    quotas: HashMap<String, f64>,
}

impl QuotaTable {
    pub fn get(&self, sector_code: &str) -> f64 {
        self.quotas.get(sector_code).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.quotas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotas.is_empty()
    }
}

impl Default for QuotaTable {
    fn default() -> Self {
        DEFAULT_QUOTAS
            .iter()
            .map(|(code, quota)| (code.to_string(), *quota))
            .collect()
    }
}

impl FromIterator<(String, f64)> for QuotaTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            quotas: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, f64>> for QuotaTable {
    fn from(quotas: HashMap<String, f64>) -> Self {
        Self { quotas }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookups() {
        let quotas = QuotaTable::default();
        assert_eq!(quotas.get("12"), 112.0);
        assert_eq!(quotas.get("53"), 184.0);
        // Present with an explicit zero
        assert_eq!(quotas.get("50"), 0.0);
        // Absent codes default to zero
        assert_eq!(quotas.get("99"), 0.0);
        assert_eq!(quotas.get("ARMI-2"), 0.0);
    }

    #[test]
    fn test_override_table() {
        let quotas: QuotaTable = [("10".to_string(), 100.0)].into_iter().collect();
        assert_eq!(quotas.get("10"), 100.0);
        assert_eq!(quotas.get("12"), 0.0);
        assert_eq!(quotas.len(), 1);
    }
}
