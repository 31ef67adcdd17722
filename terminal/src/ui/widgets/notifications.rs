//! # Notifications Widget
//!
//! Notices next to the forms and the one-line progress of a running submission.

use super::result_panel::render_result_panel;
use lib_wallet::TxStatus;
use shared::dto::{Notice, NoticeKind};

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Success => "✓",
        NoticeKind::Warning => "!",
        NoticeKind::Error => "✗",
    };
    match &notice.description {
        Some(description) => format!("{marker} {}\n  {description}", notice.message),
        None => format!("{marker} {}", notice.message),
    }
}

/// Text for a flow status change; `None` for idle.
pub fn render_status(status: &TxStatus) -> Option<String> {
    match status {
        TxStatus::Idle => None,
        TxStatus::Transacting(step) => Some(format!("… {}", step.message())),
        TxStatus::Success(result) => Some(render_result_panel(result)),
        TxStatus::Failed(notice) => Some(render_notice(notice)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::Stablecoin;
    use lib_wallet::TxStep;

    #[test]
    fn test_render_warning_with_description() {
        let notice = Notice::warning("Insufficient USDT balance", "You have 1.00 USDT but tried to spend 5 USDT");
        assert_eq!(
            render_notice(&notice),
            "! Insufficient USDT balance\n  You have 1.00 USDT but tried to spend 5 USDT"
        );
    }

    #[test]
    fn test_render_progress() {
        let status = TxStatus::Transacting(TxStep::Approving(Stablecoin::Usdc));
        assert_eq!(render_status(&status).as_deref(), Some("… Approving USDC spending..."));
        assert_eq!(render_status(&TxStatus::Idle), None);
    }
}
