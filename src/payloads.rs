//! JSON payload shapes consumed by the browser front end. The query layer
//! adds no logic of its own: it calls a loader and wraps the outcome in one
//! of these envelopes.

use serde::Serialize;

use crate::error::Result;
use crate::loaders::SeparationData;
use crate::models::{SectorSummary, SeparationRecord, SeparationSummary};
use crate::utils::constants::{NO_DATA_MESSAGE, PROCESSING_ERROR_MESSAGE};

/// Sector endpoint envelope: `{"data": [...]}`, an empty-with-message
/// variant, or an error body. The endpoint always answers with a body,
/// never a transport failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SectorPayload {
    Rows {
        data: Vec<SectorSummary>,
    },
    Empty {
        data: Vec<SectorSummary>,
        message: String,
    },
    Error {
        error: String,
        message: String,
    },
}

impl SectorPayload {
    pub fn from_result(result: Result<Vec<SectorSummary>>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => Self::Empty {
                data: Vec::new(),
                message: NO_DATA_MESSAGE.to_string(),
            },
            Ok(rows) => Self::Rows { data: rows },
            Err(err) => Self::Error {
                error: err.to_string(),
                message: PROCESSING_ERROR_MESSAGE.to_string(),
            },
        }
    }
}

/// Separation endpoint envelope: the aggregate under `sep_data` and the
/// full normalized detail under `tabela_data`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SeparationPayload {
    Rows {
        sep_data: Vec<SeparationSummary>,
        tabela_data: Vec<SeparationRecord>,
    },
    Empty {
        data: Vec<SeparationSummary>,
        message: String,
    },
    Error {
        error: String,
        message: String,
    },
}

impl SeparationPayload {
    pub fn from_result(result: Result<SeparationData>) -> Self {
        match result {
            Ok(data) if data.detail.is_empty() => Self::Empty {
                data: Vec::new(),
                message: NO_DATA_MESSAGE.to_string(),
            },
            Ok(data) => Self::Rows {
                sep_data: data.summary,
                tabela_data: data.detail,
            },
            Err(err) => Self::Error {
                error: err.to_string(),
                message: PROCESSING_ERROR_MESSAGE.to_string(),
            },
        }
    }
}
