use std::collections::HashMap;
use std::path::Path;

use calamine::Data;
use tracing::info;

use crate::error::{DashboardError, Result};
use crate::models::{QuotaTable, SectorRecord, SectorSummary};
use crate::readers::{discover_spreadsheets, Sheet, SheetReader};
use crate::utils::constants::SECTOR_FILE_PREFIX;
use crate::utils::numeric::{cell_string, parse_int, parse_locale_float};

/// Source column names of the "Sincronismo" export, in projection order.
mod cols {
    pub const SECTOR: &str = "Setor";
    pub const DESCRIPTION: &str = "Descrição setor";
    pub const WEIGHT_PLANNED: &str = "Peso Prev.";
    pub const WEIGHT_SEPARATED: &str = "Peso Sep.";
    pub const WEIGHT_REMAINING: &str = "Peso a separar";
    pub const CONTAINERS_TOTAL: &str = "Qtd. Cont.";
    pub const CONTAINERS_REMAINING: &str = "Containers a Separar";
    pub const LINES_TOTAL: &str = "Qtd. Linhas";
    pub const LINES_SEPARATED: &str = "Qtd. Linhas Sep.";
    pub const LINES_REMAINING: &str = "Qtd. Linhas Restantes";
    pub const ITEMS_TOTAL: &str = "Qtd. Itens";
    pub const ITEMS_SEPARATED: &str = "Qtd. Itens Sep";
    pub const ITEMS_REMAINING: &str = "Qtd. Itens Rest";

    pub const REQUIRED: &[&str] = &[
        SECTOR,
        DESCRIPTION,
        WEIGHT_PLANNED,
        WEIGHT_SEPARATED,
        WEIGHT_REMAINING,
        CONTAINERS_TOTAL,
        CONTAINERS_REMAINING,
        LINES_TOTAL,
        LINES_SEPARATED,
        LINES_REMAINING,
        ITEMS_TOTAL,
        ITEMS_SEPARATED,
        ITEMS_REMAINING,
    ];
}

/// Resolved column indices for one sector sheet.
struct SectorColumns {
    sector: usize,
    description: usize,
    weight_planned: usize,
    weight_separated: usize,
    weight_remaining: usize,
    containers_total: usize,
    containers_remaining: usize,
    lines_total: usize,
    lines_separated: usize,
    lines_remaining: usize,
    items_total: usize,
    items_separated: usize,
    items_remaining: usize,
}

impl SectorColumns {
    fn resolve(sheet: &Sheet, file: &Path) -> Result<Self> {
        let index = |name: &str| -> Result<usize> {
            sheet.column_index(name).ok_or_else(|| DashboardError::Schema {
                column: name.to_string(),
                file: file.display().to_string(),
            })
        };

        // Check in projection order so the first missing source column
        // is the one reported
        for name in cols::REQUIRED {
            index(name)?;
        }

        Ok(Self {
            sector: index(cols::SECTOR)?,
            description: index(cols::DESCRIPTION)?,
            weight_planned: index(cols::WEIGHT_PLANNED)?,
            weight_separated: index(cols::WEIGHT_SEPARATED)?,
            weight_remaining: index(cols::WEIGHT_REMAINING)?,
            containers_total: index(cols::CONTAINERS_TOTAL)?,
            containers_remaining: index(cols::CONTAINERS_REMAINING)?,
            lines_total: index(cols::LINES_TOTAL)?,
            lines_separated: index(cols::LINES_SEPARATED)?,
            lines_remaining: index(cols::LINES_REMAINING)?,
            items_total: index(cols::ITEMS_TOTAL)?,
            items_separated: index(cols::ITEMS_SEPARATED)?,
            items_remaining: index(cols::ITEMS_REMAINING)?,
        })
    }
}

/// Ingests "Sincronismo*" exports and aggregates separation progress per
/// sector. The quota table is injected so deployments can override it.
pub struct SectorProgressLoader {
    quotas: QuotaTable,
}

impl SectorProgressLoader {
    pub fn new() -> Self {
        Self {
            quotas: QuotaTable::default(),
        }
    }

    pub fn with_quotas(quotas: QuotaTable) -> Self {
        Self { quotas }
    }

    /// Read, normalize, and aggregate every matching spreadsheet under
    /// `directory`. No matching files is a valid empty result.
    pub fn load(&self, directory: &Path) -> Result<Vec<SectorSummary>> {
        let files = discover_spreadsheets(directory, SECTOR_FILE_PREFIX)?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        // Row 1 of the export is a title banner; row 2 is the header
        let reader = SheetReader::with_skip_rows(1);
        let mut records = Vec::new();
        for path in &files {
            let sheet = reader.read(path)?;
            parse_sector_sheet(&sheet, path, &mut records)?;
        }

        info!(
            files = files.len(),
            rows = records.len(),
            "loaded sector progress rows"
        );

        Ok(self.summarize(records))
    }

    /// Sort by sector code (plain string ordering, so "10" < "2"), then
    /// group by (code, description) in first-appearance order, summing
    /// every numeric field and attaching the quota.
    pub fn summarize(&self, mut records: Vec<SectorRecord>) -> Vec<SectorSummary> {
        records.sort_by(|a, b| a.sector_code.cmp(&b.sector_code));

        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut summaries: Vec<SectorSummary> = Vec::new();
        for record in &records {
            let key = (record.sector_code.clone(), record.sector_description.clone());
            let slot = *index.entry(key).or_insert_with(|| {
                summaries.push(SectorSummary::new(
                    record.sector_code.clone(),
                    record.sector_description.clone(),
                ));
                summaries.len() - 1
            });
            summaries[slot].add(record);
        }

        for summary in &mut summaries {
            summary.quota = self.quotas.get(&summary.sector_code);
        }

        summaries
    }
}

impl Default for SectorProgressLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_sector_sheet(sheet: &Sheet, file: &Path, out: &mut Vec<SectorRecord>) -> Result<()> {
    let cols = SectorColumns::resolve(sheet, file)?;

    for row in &sheet.rows {
        let cell = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);

        let containers_total = parse_int(cell(cols.containers_total), cols::CONTAINERS_TOTAL)?;
        let containers_remaining =
            parse_int(cell(cols.containers_remaining), cols::CONTAINERS_REMAINING)?;
        let items_total = parse_int(cell(cols.items_total), cols::ITEMS_TOTAL)?;

        // The export writes separated-item counts locale-formatted;
        // truncate after normalization
        let items_separated =
            parse_locale_float(cell(cols.items_separated), cols::ITEMS_SEPARATED)? as i64;

        // The source "remaining" column must still normalize cleanly,
        // even though the derived value replaces it
        parse_locale_float(cell(cols.items_remaining), cols::ITEMS_REMAINING)?;

        out.push(SectorRecord {
            sector_code: cell_string(cell(cols.sector)),
            sector_description: cell_string(cell(cols.description)),
            weight_planned: parse_locale_float(cell(cols.weight_planned), cols::WEIGHT_PLANNED)?,
            weight_separated: parse_locale_float(
                cell(cols.weight_separated),
                cols::WEIGHT_SEPARATED,
            )?,
            weight_remaining: parse_locale_float(
                cell(cols.weight_remaining),
                cols::WEIGHT_REMAINING,
            )?,
            containers_total,
            containers_remaining,
            containers_separated: containers_total - containers_remaining,
            lines_total: parse_int(cell(cols.lines_total), cols::LINES_TOTAL)?,
            lines_separated: parse_locale_float(cell(cols.lines_separated), cols::LINES_SEPARATED)?,
            lines_remaining: parse_locale_float(cell(cols.lines_remaining), cols::LINES_REMAINING)?,
            items_total,
            items_separated,
            items_remaining: items_total - items_separated,
        });
    }

    Ok(())
}
