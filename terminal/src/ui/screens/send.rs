//! Send tab.

use crate::ui::widgets::render_notice;
use lib_core::{TokenSymbol, DECIMALS, SHOW_DECIMALS};
use lib_utils::format_token_amount;
use lib_wallet::{BalanceSnapshot, SendForm, ValidationError};

pub fn render(
    form: &SendForm,
    balances: &BalanceSnapshot,
    check: &Result<(lib_evm::Address, u128), ValidationError>,
    busy: bool,
) -> String {
    let available =
        format_token_amount(balances.available(form.token), DECIMALS, SHOW_DECIMALS);
    let tokens = TokenSymbol::ALL
        .iter()
        .map(|t| if *t == form.token { format!("[{t}]") } else { t.to_string() })
        .collect::<Vec<_>>()
        .join(" ");
    let recipient = if form.recipient.is_empty() { "-" } else { form.recipient.as_str() };
    let amount = if form.amount.is_empty() { "0.00" } else { form.amount.as_str() };

    let mut lines = vec![
        format!("Token      {tokens}   (token <name>)"),
        format!("Recipient  {recipient}   (to <address> · scan <qr payload>)"),
        format!("Amount     {amount} {}   Available: {available}   (amount <value> · max)", form.token),
    ];
    if form.token == TokenSymbol::Paza && balances.paza_frozen > 0 {
        lines.push(format!(
            "           Frozen: {} PAZA",
            format_token_amount(balances.paza_frozen, DECIMALS, SHOW_DECIMALS)
        ));
    }

    let action = match (busy, check) {
        (true, _) => "[ Sending... ]".to_string(),
        (false, Ok(_)) => format!("[ Send {} ]  type 'send'", form.token),
        (false, Err(ValidationError::NotConnected)) => "[ Connect a wallet to send ]".to_string(),
        (false, Err(_)) => format!("[ Send {} ]  disabled", form.token),
    };
    lines.push(action);

    if let Err(err) = check {
        let typed = !form.amount.is_empty() || !form.recipient.is_empty();
        if typed && *err != ValidationError::NotConnected {
            lines.push(render_notice(&err.notice()));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_recipient_is_disabled() {
        let form = SendForm { amount: "1".to_string(), ..SendForm::default() };
        let screen = render(&form, &BalanceSnapshot::default(), &Err(ValidationError::EmptyRecipient), false);
        assert!(screen.contains("[ Send PAZA ]  disabled"));
        assert!(screen.contains("Recipient cannot be empty"));
    }

    #[test]
    fn test_frozen_line_for_paza() {
        let balances = BalanceSnapshot { paza: 10_000_000, paza_frozen: 2_000_000, paza_available: 8_000_000, ..Default::default() };
        let screen = render(&SendForm::default(), &balances, &Err(ValidationError::EmptyRecipient), false);
        assert!(screen.contains("Available: 8.00"));
        assert!(screen.contains("Frozen: 2.00 PAZA"));
    }
}
