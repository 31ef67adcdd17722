//! # Commands
//!
//! One command per input line: a verb followed by at most one argument.

use super::state::Tab;
use lib_core::{AppError, Stablecoin, TokenSymbol};
use lib_evm::WalletKind;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    /// Open the wallet selector (no argument) or connect directly
    Connect(Option<WalletKind>),
    Disconnect,
    Tab(Tab),
    Refresh,
    /// Buy tab: pay amount
    Pay(String),
    /// Buy tab: stablecoin to pay with
    Coin(Stablecoin),
    /// Fill the active tab's amount with the full available balance
    Max,
    Buy,
    /// Send tab: recipient address
    To(String),
    /// Send tab: amount
    Amount(String),
    /// Send tab: token to send
    Token(TokenSymbol),
    /// Send tab: recipient from a scanned QR payload
    Scan(String),
    Send,
    /// Close the result panel
    Dismiss,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        CommandError::InvalidArgument(err.user_message())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };
        let required =
            |name: &'static str| arg.map(str::to_string).ok_or(CommandError::MissingArgument(name));

        let command = match verb.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "" | "show" => Command::Show,
            "connect" => Command::Connect(
                arg.map(|a| a.parse::<WalletKind>().map_err(CommandError::InvalidArgument))
                    .transpose()?,
            ),
            "disconnect" => Command::Disconnect,
            "tab" => Command::Tab(
                required("tab")?.parse::<Tab>().map_err(CommandError::InvalidArgument)?,
            ),
            "refresh" => Command::Refresh,
            "pay" => Command::Pay(required("pay")?),
            "coin" => {
                let symbol = required("coin")?.parse::<TokenSymbol>()?;
                Command::Coin(Stablecoin::try_from(symbol)?)
            }
            "max" => Command::Max,
            "buy" => Command::Buy,
            "to" => Command::To(required("to")?),
            "amount" => Command::Amount(required("amount")?),
            "token" => Command::Token(required("token")?.parse::<TokenSymbol>()?),
            "scan" => Command::Scan(required("scan")?),
            "send" => Command::Send,
            "dismiss" | "close" => Command::Dismiss,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
