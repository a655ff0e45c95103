pub mod dispatch;
pub mod fetch;
pub mod normalize;
pub mod paginate;
pub mod present;
pub mod table;

pub use crate::domain::model::{OutgoingMessage, ReportKind, RowRecord};
pub use crate::domain::ports::{Fetcher, Transport};
pub use crate::utils::error::Result;
