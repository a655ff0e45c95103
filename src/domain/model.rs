use serde::{Deserialize, Serialize};

/// Selects which normalization rules, table schema and row limit apply
/// to a command's report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    TopValidators,
    Proposals,
    ProposalsPending,
    ProposalsVoting,
    ChainInfo,
    PgfSummary,
    StewardList,
    Transaction,
    PlayerSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

pub type Column = (&'static str, Align);

/// Ordered column layout for one tabular report kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub columns: &'static [Column],
}

const VALIDATOR_COLUMNS: &[Column] = &[
    ("Address", Align::Left),
    ("Alias", Align::Left),
    ("Voting Power", Align::Left),
    ("Percentage", Align::Left),
    ("Uptime", Align::Center),
];

const PROPOSAL_COLUMNS: &[Column] = &[
    ("ID", Align::Center),
    ("Kind", Align::Center),
    ("Author", Align::Center),
    ("Start Epoch", Align::Center),
    ("End Epoch", Align::Center),
    ("Grace Epoch", Align::Center),
    ("Result", Align::Center),
];

const VOTING_PROPOSAL_COLUMNS: &[Column] = &[
    ("ID", Align::Center),
    ("Kind", Align::Center),
    ("Author", Align::Center),
    ("Start Epoch", Align::Center),
    ("End Epoch", Align::Center),
    ("Grace Epoch", Align::Center),
    ("Result", Align::Center),
    ("Yay", Align::Center),
    ("Nay", Align::Center),
    ("Abstain", Align::Center),
];

impl ReportKind {
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::TopValidators => "Top Validators",
            ReportKind::Proposals => "Proposals",
            ReportKind::ProposalsPending => "Pending Proposals",
            ReportKind::ProposalsVoting => "Voting Period - Proposals",
            ReportKind::ChainInfo => "Chain Info",
            ReportKind::PgfSummary => "PGF Summary",
            ReportKind::StewardList => "Stewards",
            ReportKind::Transaction => "Transaction",
            ReportKind::PlayerSearch => "Player Search",
        }
    }

    /// Column layout for tabular kinds; composite/summary kinds have none.
    pub fn schema(self) -> Option<ColumnSchema> {
        let columns = match self {
            ReportKind::TopValidators => VALIDATOR_COLUMNS,
            ReportKind::Proposals | ReportKind::ProposalsPending => PROPOSAL_COLUMNS,
            ReportKind::ProposalsVoting => VOTING_PROPOSAL_COLUMNS,
            _ => return None,
        };
        Some(ColumnSchema { columns })
    }

    /// Maximum rows per delivered chunk, applied after filtering.
    pub fn row_limit(self) -> usize {
        match self {
            ReportKind::ProposalsVoting => 15,
            _ => 25,
        }
    }
}

/// One normalized table row: display values keyed by column name, in
/// schema order. The Tabulator rejects rows whose names diverge from
/// the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    pub fields: Vec<(&'static str, String)>,
}

impl RowRecord {
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        Self { fields }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }
}

/// Fully materialized table, sliceable for pagination.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub title: String,
    pub schema: ColumnSchema,
    pub rows: Vec<RowRecord>,
}

/// Contiguous slice of a table's rows, renderable standalone with the
/// same title and header.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub title: &'a str,
    pub schema: ColumnSchema,
    pub rows: &'a [RowRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageFormat {
    Plain,
    /// Fixed-width content wrapped in a `<pre>` marker for the transport.
    Preformatted,
}

/// One reply unit handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub format: MessageFormat,
}

impl OutgoingMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: MessageFormat::Plain,
        }
    }

    pub fn preformatted(table_text: &str) -> Self {
        Self {
            text: format!("<pre>{table_text}</pre>"),
            format: MessageFormat::Preformatted,
        }
    }
}
