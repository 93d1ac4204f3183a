use serde::{Deserialize, Serialize};

/// One normalized row of a "Sincronismo" export. Field names serialize to
/// the canonical column names the front end charts against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorRecord {
    /// Sector codes are not guaranteed numeric ("ARMI-2", "SETOR24")
    #[serde(rename = "Setor")]
    pub sector_code: String,

    #[serde(rename = "Descrição setor")]
    pub sector_description: String,

    #[serde(rename = "Peso Previsto")]
    pub weight_planned: f64,

    #[serde(rename = "Peso Separado")]
    pub weight_separated: f64,

    #[serde(rename = "Peso Restante")]
    pub weight_remaining: f64,

    #[serde(rename = "Quantidade Total de Containers")]
    pub containers_total: i64,

    #[serde(rename = "Containers Restantes")]
    pub containers_remaining: i64,

    /// Derived: total minus remaining. Negative values indicate an
    /// upstream export error and are surfaced as-is, never clamped.
    #[serde(rename = "Containers Separados")]
    pub containers_separated: i64,

    #[serde(rename = "Quantidade de Linhas")]
    pub lines_total: i64,

    /// The export reports separated/remaining lines fractionally
    #[serde(rename = "Linhas Separadas")]
    pub lines_separated: f64,

    #[serde(rename = "Linhas Restantes")]
    pub lines_remaining: f64,

    #[serde(rename = "Quantidade de Itens")]
    pub items_total: i64,

    #[serde(rename = "Itens Separados")]
    pub items_separated: i64,

    /// Derived: total minus separated, overriding the source column
    #[serde(rename = "Itens Restantes")]
    pub items_remaining: i64,
}

/// Per-sector aggregate: every numeric field summed over the rows sharing
/// a (code, description) pair, plus the quota looked up for the code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorSummary {
    #[serde(rename = "Setor")]
    pub sector_code: String,

    #[serde(rename = "Descrição setor")]
    pub sector_description: String,

    #[serde(rename = "Peso Previsto")]
    pub weight_planned: f64,

    #[serde(rename = "Peso Separado")]
    pub weight_separated: f64,

    #[serde(rename = "Peso Restante")]
    pub weight_remaining: f64,

    #[serde(rename = "Quantidade Total de Containers")]
    pub containers_total: i64,

    #[serde(rename = "Containers Restantes")]
    pub containers_remaining: i64,

    #[serde(rename = "Containers Separados")]
    pub containers_separated: i64,

    #[serde(rename = "Quantidade de Linhas")]
    pub lines_total: i64,

    #[serde(rename = "Linhas Separadas")]
    pub lines_separated: f64,

    #[serde(rename = "Linhas Restantes")]
    pub lines_remaining: f64,

    #[serde(rename = "Quantidade de Itens")]
    pub items_total: i64,

    #[serde(rename = "Itens Separados")]
    pub items_separated: i64,

    #[serde(rename = "Itens Restantes")]
    pub items_remaining: i64,

    #[serde(rename = "Meta")]
    pub quota: f64,
}

impl SectorSummary {
    /// Fresh all-zero summary for a grouping key. The quota is attached
    /// after aggregation.
    pub fn new(sector_code: String, sector_description: String) -> Self {
        Self {
            sector_code,
            sector_description,
            weight_planned: 0.0,
            weight_separated: 0.0,
            weight_remaining: 0.0,
            containers_total: 0,
            containers_remaining: 0,
            containers_separated: 0,
            lines_total: 0,
            lines_separated: 0.0,
            lines_remaining: 0.0,
            items_total: 0,
            items_separated: 0,
            items_remaining: 0,
            quota: 0.0,
        }
    }

    /// Fold one record into the running sums.
    pub fn add(&mut self, record: &SectorRecord) {
        self.weight_planned += record.weight_planned;
        self.weight_separated += record.weight_separated;
        self.weight_remaining += record.weight_remaining;
        self.containers_total += record.containers_total;
        self.containers_remaining += record.containers_remaining;
        self.containers_separated += record.containers_separated;
        self.lines_total += record.lines_total;
        self.lines_separated += record.lines_separated;
        self.lines_remaining += record.lines_remaining;
        self.items_total += record.items_total;
        self.items_separated += record.items_separated;
        self.items_remaining += record.items_remaining;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, containers_total: i64, containers_remaining: i64) -> SectorRecord {
        SectorRecord {
            sector_code: code.to_string(),
            sector_description: "Mezanino".to_string(),
            weight_planned: 100.0,
            weight_separated: 60.0,
            weight_remaining: 40.0,
            containers_total,
            containers_remaining,
            containers_separated: containers_total - containers_remaining,
            lines_total: 20,
            lines_separated: 12.5,
            lines_remaining: 7.5,
            items_total: 200,
            items_separated: 150,
            items_remaining: 50,
        }
    }

    #[test]
    fn test_summary_accumulates_all_numeric_fields() {
        let mut summary = SectorSummary::new("10".into(), "Mezanino".into());
        summary.add(&record("10", 10, 3));
        summary.add(&record("10", 5, 1));

        assert_eq!(summary.containers_total, 15);
        assert_eq!(summary.containers_remaining, 4);
        assert_eq!(summary.containers_separated, 11);
        assert_eq!(summary.lines_total, 40);
        assert!((summary.lines_separated - 25.0).abs() < f64::EPSILON);
        assert!((summary.weight_planned - 200.0).abs() < f64::EPSILON);
        assert_eq!(summary.items_remaining, 100);
        // Derivation invariant survives summation
        assert_eq!(
            summary.containers_separated,
            summary.containers_total - summary.containers_remaining
        );
    }

    #[test]
    fn test_serializes_canonical_column_names() {
        let summary = SectorSummary::new("10".into(), "Mezanino".into());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("Setor").is_some());
        assert!(json.get("Descrição setor").is_some());
        assert!(json.get("Quantidade Total de Containers").is_some());
        assert!(json.get("Meta").is_some());
        assert!(json.get("sector_code").is_none());
    }
}
