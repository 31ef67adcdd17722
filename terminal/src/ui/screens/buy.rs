//! Buy tab.

use crate::ui::widgets::render_notice;
use lib_core::{Stablecoin, DECIMALS, SHOW_DECIMALS};
use lib_utils::format_token_amount;
use lib_wallet::{BalanceSnapshot, BuyForm, ValidationError};

pub fn render(
    form: &BuyForm,
    balances: &BalanceSnapshot,
    check: &Result<u128, ValidationError>,
    busy: bool,
) -> String {
    let coin = form.stablecoin.name();
    let balance = format_token_amount(
        balances.available(form.stablecoin.token()),
        DECIMALS,
        SHOW_DECIMALS,
    );
    let coins = Stablecoin::ALL
        .iter()
        .map(|c| if *c == form.stablecoin { format!("[{}]", c.name()) } else { c.name().to_string() })
        .collect::<Vec<_>>()
        .join(" ");
    let pay = if form.pay_amount.is_empty() { "0.00" } else { form.pay_amount.as_str() };
    let receive = form.receive_estimate().unwrap_or_else(|| "0.00".to_string());

    let mut lines = vec![
        format!("You pay                Balance: {balance} {coin}"),
        format!("  {pay} {coin}      {coins}   (pay <amount> · coin <name> · max)"),
        format!("You receive            1 PAZA = 0.017 {coin}"),
        format!("  {receive} PAZA"),
    ];

    let action = match (busy, check) {
        (true, _) => "[ Processing... ]".to_string(),
        (false, Ok(_)) => "[ Buy PAZA ]  type 'buy'".to_string(),
        (false, Err(ValidationError::NotConnected)) => "[ Connect a wallet to buy ]".to_string(),
        (false, Err(_)) => "[ Buy PAZA ]  disabled".to_string(),
    };
    lines.push(action);

    if let Err(err) = check {
        if !form.pay_amount.is_empty() && *err != ValidationError::NotConnected {
            lines.push(render_notice(&err.notice()));
        }
    }
    lines.join("\n")
}
