use crate::domain::analysis_config::AnalyzerConfig;
use crate::domain::error::AnalysisError;
use crate::domain::table::{cell_text, Row};

/// Pull the text values of `column` out of `rows`, in row order.
///
/// The first row defines the schema: the column must be present there.
/// Later rows that lack the column, or hold null, contribute nothing unless
/// `require_column_in_every_row` is set, in which case a missing key fails.
pub fn extract_column(
    rows: &[Row],
    column: &str,
    config: &AnalyzerConfig,
) -> Result<Vec<String>, AnalysisError> {
    let first = rows.first().ok_or(AnalysisError::EmptyDataset)?;
    if !first.contains_key(column) {
        return Err(AnalysisError::MissingColumn {
            column: column.to_string(),
        });
    }

    let mut texts = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match row.get(column) {
            Some(value) => {
                if let Some(text) = cell_text(value) {
                    texts.push(text);
                }
            }
            None if config.require_column_in_every_row => {
                return Err(AnalysisError::MissingColumnInRow {
                    column: column.to_string(),
                    row: index,
                });
            }
            None => {}
        }
    }

    Ok(texts)
}
