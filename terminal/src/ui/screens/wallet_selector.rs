//! Wallet selector modal.

use lib_evm::WalletKind;

pub fn render() -> String {
    let row = |kind: &WalletKind| {
        format!("  {:<10} {:<9} {}", kind.to_string().to_lowercase(), kind.display_name(), kind.description())
    };
    let social: Vec<_> = WalletKind::ALL.iter().filter(|k| k.is_social()).map(row).collect();
    let external: Vec<_> = WalletKind::ALL.iter().filter(|k| !k.is_social()).map(row).collect();

    format!(
        "Connect Wallet\n Social login\n{}\n External wallets\n{}\nType 'connect <name>' to continue.",
        social.join("\n"),
        external.join("\n")
    )
}
