use serde::{Deserialize, Serialize};

use crate::utils::constants::{CLOSED_PICKING_LIST, PENDING_NO, UNALLOCATED_USER};

/// One normalized pick-line from a "Detalhes_Se" export.
///
/// The textual `pending` / `allocated_user` values stay on the record next
/// to their derived 0/1 flags; only the flags are summed during
/// aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparationRecord {
    #[serde(rename = "Onda")]
    pub wave: String,

    #[serde(rename = "Carga")]
    pub load: String,

    #[serde(rename = "Stage")]
    pub stage: String,

    /// Empty cells become the "PL Fechado" filler
    #[serde(rename = "Container")]
    pub container: String,

    #[serde(rename = "Item")]
    pub item: String,

    #[serde(rename = "Descrição")]
    pub description: String,

    #[serde(rename = "Endereço Separação")]
    pub pick_address: String,

    #[serde(rename = "Quantidade Pedida")]
    pub quantity_requested: f64,

    #[serde(rename = "Área Separação")]
    pub separation_area: String,

    /// "Sim"/"Nao" as exported
    #[serde(rename = "Pendência")]
    pub pending: String,

    #[serde(rename = "Status")]
    pub status: String,

    /// Empty cells become "Não alocado"
    #[serde(rename = "Usuário Alocado")]
    pub allocated_user: String,

    #[serde(rename = "pending_flag")]
    pub pending_flag: i64,

    #[serde(rename = "allocated_flag")]
    pub allocated_flag: i64,

    /// 1 on the first row (in file-concatenation order) carrying each
    /// distinct container value, 0 on every repeat
    #[serde(rename = "containers_unicos")]
    pub first_container_flag: i64,
}

impl SeparationRecord {
    /// Derive the 0/1 flags from the textual fields. The first-occurrence
    /// flag is a whole-table property and is marked by the loader.
    pub fn derive_flags(&mut self) {
        self.pending_flag = if self.pending == PENDING_NO { 0 } else { 1 };
        self.allocated_flag = if self.allocated_user == UNALLOCATED_USER {
            0
        } else {
            1
        };
    }

    pub fn is_closed_picking_list(&self) -> bool {
        self.container == CLOSED_PICKING_LIST
    }
}

/// Aggregate per (wave, load, stage, separation area). JSON keys mirror
/// the pivoted columns the front end reads: the line count lands under
/// "Container", the flag sums under the flag's source column name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparationSummary {
    #[serde(rename = "Onda")]
    pub wave: String,

    #[serde(rename = "Carga")]
    pub load: String,

    #[serde(rename = "Stage")]
    pub stage: String,

    #[serde(rename = "Área Separação")]
    pub separation_area: String,

    #[serde(rename = "Container")]
    pub line_count: u64,

    #[serde(rename = "Pendência")]
    pub pending_count: i64,

    #[serde(rename = "Usuário Alocado")]
    pub allocated_count: i64,

    #[serde(rename = "containers_unicos")]
    pub unique_container_count: i64,
}

impl SeparationSummary {
    pub fn new(wave: String, load: String, stage: String, separation_area: String) -> Self {
        Self {
            wave,
            load,
            stage,
            separation_area,
            line_count: 0,
            pending_count: 0,
            allocated_count: 0,
            unique_container_count: 0,
        }
    }

    pub fn add(&mut self, record: &SeparationRecord) {
        self.line_count += 1;
        self.pending_count += record.pending_flag;
        self.allocated_count += record.allocated_flag;
        self.unique_container_count += record.first_container_flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pending: &str, user: &str) -> SeparationRecord {
        SeparationRecord {
            wave: "W1".into(),
            load: "C100".into(),
            stage: "S1".into(),
            container: "CT-1".into(),
            item: "123".into(),
            description: "Parafuso".into(),
            pick_address: "A-01-02".into(),
            quantity_requested: 4.0,
            separation_area: "Mezanino".into(),
            pending: pending.into(),
            status: "Aberto".into(),
            allocated_user: user.into(),
            pending_flag: 0,
            allocated_flag: 0,
            first_container_flag: 0,
        }
    }

    #[test]
    fn test_derive_flags() {
        let mut r = record("Nao", "Não alocado");
        r.derive_flags();
        assert_eq!(r.pending_flag, 0);
        assert_eq!(r.allocated_flag, 0);

        let mut r = record("Sim", "joao.silva");
        r.derive_flags();
        assert_eq!(r.pending_flag, 1);
        assert_eq!(r.allocated_flag, 1);

        // Anything other than the exact "Nao" literal counts as pending
        let mut r = record("Não", "Não alocado");
        r.derive_flags();
        assert_eq!(r.pending_flag, 1);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary =
            SeparationSummary::new("W1".into(), "C100".into(), "S1".into(), "Mezanino".into());
        let mut a = record("Sim", "joao.silva");
        a.derive_flags();
        a.first_container_flag = 1;
        let mut b = record("Nao", "Não alocado");
        b.derive_flags();

        summary.add(&a);
        summary.add(&b);

        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.allocated_count, 1);
        assert_eq!(summary.unique_container_count, 1);
    }

    #[test]
    fn test_serializes_pivot_column_names() {
        let summary =
            SeparationSummary::new("W1".into(), "C100".into(), "S1".into(), "Mezanino".into());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("Onda").is_some());
        assert!(json.get("Área Separação").is_some());
        assert!(json.get("Container").is_some());
        assert!(json.get("containers_unicos").is_some());
    }
}
