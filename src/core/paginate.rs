//! Row-slice pagination: ceil(N/L) chunks, never splitting a row,
//! zero chunks for zero rows.

use crate::core::table;
use crate::domain::model::{Chunk, RenderedTable};
use crate::utils::error::Result;

pub fn paginate(table: &RenderedTable, limit: usize) -> Vec<Chunk<'_>> {
    debug_assert!(limit > 0, "chunk limit must be strictly positive");
    table
        .rows
        .chunks(limit)
        .map(|rows| Chunk {
            title: &table.title,
            schema: table.schema,
            rows,
        })
        .collect()
}

impl Chunk<'_> {
    pub fn render(&self) -> Result<String> {
        table::render(self.title, self.schema, self.rows)
    }
}
