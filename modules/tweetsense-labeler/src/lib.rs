use std::path::Path;

use ai_client::Classifier;
use tracing::{debug, info};
use tweetsense_common::{Result, Table};

/// Column holding the text to classify.
pub const TEXT_COLUMN: &str = "text";
pub const LABEL_COLUMN: &str = "label";
pub const SCORE_COLUMN: &str = "score";

/// Classify every row's `text` cell and append `label` and `score` columns.
///
/// Input columns and row order are kept as-is. A table that was labeled
/// before has its `label`/`score` cells overwritten rather than duplicated.
/// A missing `text` column fails before any inference is attempted; a failed
/// inference aborts the whole run.
pub async fn label_table(classifier: &dyn Classifier, table: Table) -> Result<Table> {
    let text_idx = table.require_column(TEXT_COLUMN)?;
    let total = table.len();
    info!(rows = total, "Labeling rows");

    let mut headers = table.headers;
    let label_idx = column_or_append(&mut headers, LABEL_COLUMN);
    let score_idx = column_or_append(&mut headers, SCORE_COLUMN);
    let width = headers.len();

    let mut labeled = Table::new(headers);
    labeled.rows.reserve(total);

    for (i, mut row) in table.rows.into_iter().enumerate() {
        let sentiment = classifier.classify(&row[text_idx]).await?;
        debug!(row = i + 1, total, label = %sentiment.label, score = sentiment.score, "Row labeled");

        row.resize(width, String::new());
        row[label_idx] = sentiment.label;
        row[score_idx] = sentiment.score.to_string();
        labeled.rows.push(row);
    }

    info!(rows = labeled.len(), "Labeling complete");
    Ok(labeled)
}

/// Index of `name` in `headers`, appending it when absent.
fn column_or_append(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(idx) => idx,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}

/// Read `input`, label it, and write the result to `output`. Nothing is
/// written unless every row was labeled.
pub async fn label_file(
    classifier: &dyn Classifier,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<usize> {
    let table = Table::read(input)?;
    let labeled = label_table(classifier, table).await?;
    labeled.write(output)?;
    Ok(labeled.len())
}
