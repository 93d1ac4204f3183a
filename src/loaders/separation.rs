use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use calamine::Data;
use tracing::info;

use crate::error::{DashboardError, Result};
use crate::models::{SeparationRecord, SeparationSummary};
use crate::readers::{discover_spreadsheets, Sheet, SheetReader};
use crate::utils::constants::{CLOSED_PICKING_LIST, SEPARATION_FILE_PREFIX, UNALLOCATED_USER};
use crate::utils::numeric::{cell_opt_string, cell_string, parse_locale_float};

/// Source column names of the "Detalhes_Se" export.
mod cols {
    pub const WAVE: &str = "Onda";
    pub const LOAD: &str = "Carga";
    pub const STAGE: &str = "Stage";
    pub const CONTAINER: &str = "Container";
    pub const ITEM: &str = "Item";
    pub const DESCRIPTION: &str = "Descrição";
    pub const PICK_ADDRESS: &str = "Endereço Separação";
    pub const QUANTITY_REQUESTED: &str = "Qtd. Ped.";
    pub const SEPARATION_AREA: &str = "Área Sep.";
    pub const PENDING: &str = "Pend.";
    pub const STATUS: &str = "Status";
    pub const ALLOCATED_USER: &str = "Usuário Alocado";

    pub const REQUIRED: &[&str] = &[
        WAVE,
        LOAD,
        STAGE,
        CONTAINER,
        ITEM,
        DESCRIPTION,
        PICK_ADDRESS,
        QUANTITY_REQUESTED,
        SEPARATION_AREA,
        PENDING,
        STATUS,
        ALLOCATED_USER,
    ];
}

/// Aggregate and per-row detail of one load call. Callers may need either:
/// the summary feeds the wave charts, the detail feeds the drill-down table.
#[derive(Debug, Clone, Default)]
pub struct SeparationData {
    pub summary: Vec<SeparationSummary>,
    pub detail: Vec<SeparationRecord>,
}

/// Ingests "Detalhes_Se*" pick-line exports: normalizes each row, derives
/// the 0/1 flags, marks first container occurrences, and aggregates per
/// (wave, load, stage, area).
pub struct SeparationDetailLoader;

impl SeparationDetailLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, directory: &Path) -> Result<SeparationData> {
        let files = discover_spreadsheets(directory, SEPARATION_FILE_PREFIX)?;
        if files.is_empty() {
            return Ok(SeparationData::default());
        }

        let reader = SheetReader::new();
        let mut detail = Vec::new();
        for path in &files {
            let sheet = reader.read(path)?;
            parse_separation_sheet(&sheet, path, &mut detail)?;
        }

        mark_first_container_occurrences(&mut detail);
        let summary = summarize(&detail);

        info!(
            files = files.len(),
            rows = detail.len(),
            groups = summary.len(),
            "loaded separation detail"
        );

        Ok(SeparationData { summary, detail })
    }
}

impl Default for SeparationDetailLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_separation_sheet(
    sheet: &Sheet,
    file: &Path,
    out: &mut Vec<SeparationRecord>,
) -> Result<()> {
    let mut indices = Vec::with_capacity(cols::REQUIRED.len());
    for name in cols::REQUIRED {
        let idx = sheet.column_index(name).ok_or_else(|| DashboardError::Schema {
            column: name.to_string(),
            file: file.display().to_string(),
        })?;
        indices.push(idx);
    }
    let [wave, load, stage, container, item, description, pick_address, quantity, area, pending, status, user] =
        indices[..]
    else {
        unreachable!("REQUIRED has twelve columns");
    };

    for row in &sheet.rows {
        let cell = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);

        let mut record = SeparationRecord {
            wave: cell_string(cell(wave)),
            load: cell_string(cell(load)),
            stage: cell_string(cell(stage)),
            // Rows without a container belong to an already-closed
            // picking list; the filler keeps them groupable
            container: cell_opt_string(cell(container))
                .unwrap_or_else(|| CLOSED_PICKING_LIST.to_string()),
            item: cell_string(cell(item)),
            description: cell_string(cell(description)),
            pick_address: cell_string(cell(pick_address)),
            quantity_requested: parse_locale_float(cell(quantity), cols::QUANTITY_REQUESTED)?,
            separation_area: cell_string(cell(area)),
            pending: cell_string(cell(pending)),
            status: cell_string(cell(status)),
            allocated_user: cell_opt_string(cell(user))
                .unwrap_or_else(|| UNALLOCATED_USER.to_string()),
            pending_flag: 0,
            allocated_flag: 0,
            first_container_flag: 0,
        };
        record.derive_flags();
        out.push(record);
    }

    Ok(())
}

/// Mark exactly one row per distinct container value: the first one in
/// file-concatenation order. The "PL Fechado" filler groups like any real
/// container, so all closed-picking-list rows share a single marked row.
fn mark_first_container_occurrences(records: &mut [SeparationRecord]) {
    let mut seen = HashSet::new();
    for record in records.iter_mut() {
        record.first_container_flag = if seen.insert(record.container.clone()) {
            1
        } else {
            0
        };
    }
}

/// Group by (wave, load, stage, area), counting rows and summing flags.
/// Output follows the sorted grouping key, matching the pivoted table the
/// front end was built against.
fn summarize(records: &[SeparationRecord]) -> Vec<SeparationSummary> {
    let mut groups: BTreeMap<(String, String, String, String), SeparationSummary> = BTreeMap::new();

    for record in records {
        let key = (
            record.wave.clone(),
            record.load.clone(),
            record.stage.clone(),
            record.separation_area.clone(),
        );
        groups
            .entry(key)
            .or_insert_with(|| {
                SeparationSummary::new(
                    record.wave.clone(),
                    record.load.clone(),
                    record.stage.clone(),
                    record.separation_area.clone(),
                )
            })
            .add(record);
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(wave: &str, container: &str, pending: &str, user: &str) -> SeparationRecord {
        let mut record = SeparationRecord {
            wave: wave.to_string(),
            load: "C100".into(),
            stage: "S1".into(),
            container: container.to_string(),
            item: "123".into(),
            description: "Parafuso".into(),
            pick_address: "A-01-02".into(),
            quantity_requested: 2.0,
            separation_area: "Mezanino".into(),
            pending: pending.to_string(),
            status: "Aberto".into(),
            allocated_user: user.to_string(),
            pending_flag: 0,
            allocated_flag: 0,
            first_container_flag: 0,
        };
        record.derive_flags();
        record
    }

    #[test]
    fn test_first_occurrence_marked_once_per_container() {
        let mut records = vec![
            record("W1", "CT-1", "Nao", "ana"),
            record("W1", "CT-2", "Nao", "ana"),
            record("W1", "CT-1", "Sim", "ana"),
            record("W2", "CT-1", "Nao", "ana"),
        ];
        mark_first_container_occurrences(&mut records);

        let flags: Vec<_> = records.iter().map(|r| r.first_container_flag).collect();
        assert_eq!(flags, vec![1, 1, 0, 0]);

        // Exactly one marked row per distinct value
        let marked: i64 = records.iter().map(|r| r.first_container_flag).sum();
        assert_eq!(marked, 2);
    }

    #[test]
    fn test_closed_picking_list_filler_groups_like_any_value() {
        let mut records = vec![
            record("W1", "PL Fechado", "Nao", "ana"),
            record("W1", "PL Fechado", "Nao", "ana"),
        ];
        mark_first_container_occurrences(&mut records);
        assert_eq!(records[0].first_container_flag, 1);
        assert_eq!(records[1].first_container_flag, 0);
    }

    #[test]
    fn test_summarize_counts_and_sums() {
        let mut records = vec![
            record("W1", "CT-1", "Sim", "ana"),
            record("W1", "CT-1", "Nao", "Não alocado"),
            record("W2", "CT-2", "Nao", "bruno"),
        ];
        mark_first_container_occurrences(&mut records);
        let summary = summarize(&records);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].wave, "W1");
        assert_eq!(summary[0].line_count, 2);
        assert_eq!(summary[0].pending_count, 1);
        assert_eq!(summary[0].allocated_count, 1);
        assert_eq!(summary[0].unique_container_count, 1);
        assert_eq!(summary[1].wave, "W2");
        assert_eq!(summary[1].line_count, 1);
    }

    #[test]
    fn test_summed_values_are_order_insensitive() {
        let mut forward = vec![
            record("W1", "CT-1", "Sim", "ana"),
            record("W1", "CT-2", "Nao", "bruno"),
        ];
        let mut reversed: Vec<_> = forward.iter().rev().cloned().collect();
        mark_first_container_occurrences(&mut forward);
        mark_first_container_occurrences(&mut reversed);

        assert_eq!(
            serde_json::to_value(summarize(&forward)).unwrap(),
            serde_json::to_value(summarize(&reversed)).unwrap()
        );
    }
}
