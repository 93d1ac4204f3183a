use calamine::Data;

use crate::error::{DashboardError, Result};

/// Normalize a locale-formatted numeric string (thousands `.`, decimal `,`)
/// to a plain decimal.
///
/// # Examples
/// ```
/// use sincro_dashboard::utils::parse_locale_str;
///
/// assert_eq!(parse_locale_str("1.234,56"), Some(1234.56));
/// ```
pub fn parse_locale_str(value: &str) -> Option<f64> {
    let normalized = value.trim().replace('.', "").replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// Parse a locale-formatted numeric cell to f64.
///
/// Numeric cells bypass separator substitution: a workbook cell that is
/// already a number was never locale-formatted.
pub fn parse_locale_float(cell: &Data, column: &str) -> Result<f64> {
    match cell {
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        Data::String(s) => parse_locale_str(s).ok_or_else(|| DashboardError::NumericParse {
            column: column.to_string(),
            value: s.clone(),
        }),
        other => Err(DashboardError::NumericParse {
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Coerce a cell to i64, truncating any fractional part.
pub fn parse_int(cell: &Data, column: &str) -> Result<i64> {
    match cell {
        Data::Int(i) => Ok(*i),
        Data::Float(f) => Ok(*f as i64),
        Data::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| parse_locale_str(s).map(|f| f as i64))
            .ok_or_else(|| DashboardError::TypeCoercion {
                column: column.to_string(),
                value: s.clone(),
                target: "integer",
            }),
        other => Err(DashboardError::TypeCoercion {
            column: column.to_string(),
            value: other.to_string(),
            target: "integer",
        }),
    }
}

/// Render a cell as text. Whole-number floats drop the trailing `.0` so a
/// sector code stored as `10.0` reads back as "10".
pub fn cell_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Render a cell as text, or None when the cell is empty.
pub fn cell_opt_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => Some(cell_string(other)),
    }
}
