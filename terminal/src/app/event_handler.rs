//! # Event Handler
//!
//! Turns results of background tasks into text for the input loop.
//!
//! Flow progress, results, and failure notices are printed from the status
//! watchers, so a finished submission only needs the redrawn screen here.
//! The one exception is a submission rejected before it started.

use crate::app::{App, AppEvent};
use crate::ui::widgets::render_notice;
use lib_core::AppError;
use shared::dto::{Notice, TransactionResult};
use shared::utils::format_address;
use tracing::{debug, info};

impl App {
    pub fn handle_event(&self, event: AppEvent) -> String {
        debug!(event = ?event, "Handling app event");

        match event {
            AppEvent::Connected(Ok(Some(account))) => {
                info!(address = %account.address, "Wallet connected");
                format!(
                    "{}\n\n{}",
                    render_notice(&Notice::success(format!(
                        "Connected {}",
                        format_address(&account.address.to_string(), 6, 4)
                    ))),
                    self.screen()
                )
            }
            AppEvent::Connected(Ok(None)) => "A wallet connection is already in progress".to_string(),
            AppEvent::Connected(Err(e)) => render_notice(&Notice::error(format!(
                "Failed to connect wallet: {}",
                e.user_message()
            ))),
            AppEvent::Disconnected => format!("Wallet disconnected\n\n{}", self.screen()),
            AppEvent::BuyFinished(result) | AppEvent::SendFinished(result) => {
                self.handle_submission(result)
            }
            AppEvent::BalancesRefreshed => self.screen(),
        }
    }

    fn handle_submission(&self, result: Result<TransactionResult, AppError>) -> String {
        match result {
            Err(AppError::Validation(message)) => render_notice(&Notice::error(message)),
            _ => self.screen(),
        }
    }
}
