use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use serde::{Deserialize, Serialize};

use crate::error::ScourError;
use crate::model::NewChemical;

/// Minimum number of `;`-separated fields for a line to be imported.
const MIN_FIELDS: usize = 6;

/// A line or row that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line (or spreadsheet row) number.
    pub line_number: usize,
    pub line_text: String,
    pub reason: String,
}

/// Chemicals read from a bulk import, not yet given ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub chemicals: Vec<NewChemical>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse semicolon-delimited text, one chemical per line:
///
/// `name;activeIngredient;usedFor;application;toxicologicalInfo;personalProtection[;color]`
///
/// Blank lines are ignored. Lines with fewer than six fields are skipped.
/// Empty hazard fields become `None`; the colour is kept only if it starts
/// with `#`.
pub fn parse_delimited(text: &str) -> Result<ImportOutcome, ScourError> {
    if text.trim().is_empty() {
        return Err(ScourError::Import("nothing to import".into()));
    }

    let mut outcome = ImportOutcome::default();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(';').map(str::trim).collect();
        if parts.len() < MIN_FIELDS {
            outcome.skipped.push(SkippedLine {
                line_number: idx + 1,
                line_text: line.to_string(),
                reason: format!(
                    "expected at least {MIN_FIELDS} ';'-separated fields, found {}",
                    parts.len()
                ),
            });
            continue;
        }

        outcome.chemicals.push(NewChemical {
            name: parts[0].to_string(),
            active_ingredient: parts[1].to_string(),
            used_for: parts[2].to_string(),
            application: parts[3].to_string(),
            toxicological_info: non_empty(parts[4]),
            personal_protection: non_empty(parts[5]),
            color: parts
                .get(6)
                .filter(|c| c.starts_with('#'))
                .map(|c| c.to_string()),
            image: None,
        });
    }

    tracing::debug!(
        imported = outcome.chemicals.len(),
        skipped = outcome.skipped.len(),
        "parsed delimited import"
    );
    Ok(outcome)
}

/// Parse the first worksheet of an xlsx workbook.
///
/// Row 1 holds column headers; see [`parse_range`] for the accepted names.
pub fn parse_xlsx(bytes: &[u8]) -> Result<ImportOutcome, ScourError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| ScourError::Import(format!("failed to open xlsx: {e}")))?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScourError::Import("workbook has no worksheets".into()))?
        .map_err(|e| ScourError::Import(format!("failed to read first worksheet: {e}")))?;

    parse_range(&sheet)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    ActiveIngredient,
    UsedFor,
    Application,
    ToxicologicalInfo,
    PersonalProtection,
    Color,
}

impl Column {
    /// Match a header cell, ignoring case, spaces, `_` and `-`.
    fn from_header(header: &str) -> Option<Column> {
        let key: String = header
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "name" | "product" | "productname" => Some(Column::Name),
            "activeingredient" | "ingredient" => Some(Column::ActiveIngredient),
            "usedfor" | "keywords" => Some(Column::UsedFor),
            "application" | "instructions" => Some(Column::Application),
            "toxicologicalinfo" | "toxicology" => Some(Column::ToxicologicalInfo),
            "personalprotection" | "ppe" => Some(Column::PersonalProtection),
            "color" | "colour" => Some(Column::Color),
            _ => None,
        }
    }
}

/// Column positions found in the header row.
#[derive(Debug, Default)]
struct ColumnMap {
    name: Option<usize>,
    active_ingredient: Option<usize>,
    used_for: Option<usize>,
    application: Option<usize>,
    toxicological_info: Option<usize>,
    personal_protection: Option<usize>,
    color: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &[Data]) -> Result<ColumnMap, ScourError> {
        let mut map = ColumnMap::default();
        for (idx, cell) in headers.iter().enumerate() {
            let Some(column) = cell_as_string(cell).as_deref().and_then(Column::from_header)
            else {
                continue;
            };
            let slot = match column {
                Column::Name => &mut map.name,
                Column::ActiveIngredient => &mut map.active_ingredient,
                Column::UsedFor => &mut map.used_for,
                Column::Application => &mut map.application,
                Column::ToxicologicalInfo => &mut map.toxicological_info,
                Column::PersonalProtection => &mut map.personal_protection,
                Column::Color => &mut map.color,
            };
            slot.get_or_insert(idx);
        }

        let missing: Vec<&str> = [
            ("name", map.name),
            ("usedFor", map.used_for),
            ("application", map.application),
        ]
        .iter()
        .filter(|(_, pos)| pos.is_none())
        .map(|(label, _)| *label)
        .collect();

        if !missing.is_empty() {
            return Err(ScourError::Import(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }
        Ok(map)
    }
}

/// Parse a worksheet range whose first row is a header.
///
/// Required headers: `name`, `usedFor`, `application`. Optional:
/// `activeIngredient`, `toxicologicalInfo`, `personalProtection`, `color`.
/// Fully empty rows are ignored; rows without a name are skipped.
pub fn parse_range(range: &Range<Data>) -> Result<ImportOutcome, ScourError> {
    let mut rows = range.rows();
    let headers = rows
        .next()
        .ok_or_else(|| ScourError::Import("worksheet is empty".into()))?;
    let columns = ColumnMap::from_headers(headers)?;

    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let mut outcome = ImportOutcome::default();

    for (offset, row) in rows.enumerate() {
        // +1 for the header, +1 for 1-based numbering
        let row_number = first_row + offset + 2;
        let get = |pos: Option<usize>| {
            pos.and_then(|p| row.get(p))
                .and_then(cell_as_string)
        };

        if row.iter().all(|c| cell_as_string(c).is_none()) {
            continue;
        }

        let Some(name) = get(columns.name) else {
            outcome.skipped.push(SkippedLine {
                line_number: row_number,
                line_text: row
                    .iter()
                    .filter_map(cell_as_string)
                    .collect::<Vec<_>>()
                    .join("; "),
                reason: "row has no product name".into(),
            });
            continue;
        };

        outcome.chemicals.push(NewChemical {
            name,
            active_ingredient: get(columns.active_ingredient).unwrap_or_default(),
            used_for: get(columns.used_for).unwrap_or_default(),
            application: get(columns.application).unwrap_or_default(),
            toxicological_info: get(columns.toxicological_info),
            personal_protection: get(columns.personal_protection),
            color: get(columns.color).filter(|c| c.starts_with('#')),
            image: None,
        });
    }

    Ok(outcome)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn cell_as_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}
