//! Turns normalized results into reply messages. Every error raised
//! below this boundary becomes exactly one user-facing message.

use crate::core::paginate;
use crate::domain::model::{OutgoingMessage, RenderedTable, ReportKind, RowRecord};
use crate::utils::error::{BotError, Result};

/// Render + paginate a tabular report: one preformatted message per
/// chunk, or a single explicit "no data" message for an empty row set.
pub fn table_messages(kind: ReportKind, rows: Vec<RowRecord>) -> Result<Vec<OutgoingMessage>> {
    let Some(schema) = kind.schema() else {
        return Err(BotError::Render {
            expected: "a tabular report kind".to_string(),
            got: kind.title().to_string(),
        });
    };

    if rows.is_empty() {
        return Ok(vec![OutgoingMessage::plain(format!(
            "No data for {}.",
            kind.title()
        ))]);
    }

    let table = RenderedTable {
        title: kind.title().to_string(),
        schema,
        rows,
    };
    let mut messages = Vec::new();
    for chunk in paginate::paginate(&table, kind.row_limit()) {
        let rendered = chunk.render()?;
        messages.push(OutgoingMessage::preformatted(&rendered));
    }
    Ok(messages)
}

/// Composite and summary reports reply with exactly one plain message.
pub fn summary_message(lines: &[String]) -> OutgoingMessage {
    OutgoingMessage::plain(lines.join("\n"))
}

pub fn error_message(err: &BotError) -> OutgoingMessage {
    tracing::warn!("Command failed: {}", err);
    OutgoingMessage::plain(err.user_message())
}
