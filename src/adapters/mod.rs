// Adapters layer: concrete implementations for external systems. The
// HTTP fetcher lives in core::fetch; chat transports would slot in
// beside StdoutTransport.

use crate::domain::model::OutgoingMessage;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Prints replies to stdout, one message per block. Stands in for the
/// chat transport.
#[derive(Debug, Clone, Default)]
pub struct StdoutTransport;

#[async_trait]
impl Transport for StdoutTransport {
    async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        println!("{}", message.text);
        Ok(())
    }
}
