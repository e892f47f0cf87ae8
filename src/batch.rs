//! Batch aggregation over parsed comment rows.

use serde::Serialize;
use utoipa::ToSchema;

use crate::sentiment::{score_text, Sentiment};

/// Scored comment as it appears in the batch response.
///
/// The raw score is kept for callers and tests but stays off the wire; the
/// response contract is `{comment, sentiment}` only.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentResult {
    pub comment: String,
    pub sentiment: Sentiment,
    #[serde(skip_serializing)]
    pub score: f64,
}

/// Aggregated result for one uploaded batch.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BatchSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub comments: Vec<CommentResult>,
}

/// Score every row of a parsed batch, in row order.
///
/// Each row's fields are joined with a single space and trimmed; rows that
/// come out empty are skipped entirely (no tally, no result entry). The
/// joined comment is stored as-is, not lowercased.
pub fn summarize_rows<I>(rows: I) -> BatchSummary
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut summary = BatchSummary {
        positive: 0,
        negative: 0,
        neutral: 0,
        comments: Vec::new(),
    };

    for row in rows {
        let comment = row.join(" ").trim().to_string();
        if comment.is_empty() {
            continue;
        }

        let scored = score_text(&comment);
        match scored.sentiment {
            Sentiment::Positive => summary.positive += 1,
            Sentiment::Negative => summary.negative += 1,
            Sentiment::Neutral => summary.neutral += 1,
        }

        summary.comments.push(CommentResult {
            comment,
            sentiment: scored.sentiment,
            score: scored.score,
        });
    }

    summary
}

/// Parse an uploaded CSV payload into rows of string fields.
///
/// No header row; field counts may vary per row (Python-csv style). Any
/// malformed record fails the whole batch.
pub fn rows_from_csv(text: &str) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}
