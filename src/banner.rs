use crate::ansi;
use crate::models::feature::FEATURES;
use crate::models::plan::{BillingCycle, PLANS, display_price};

pub const BANNER: &str = r#" ____        _          _   _           _
|  _ \ _   _| |___  ___| \ | | ___   __| | ___
| |_) | | | | / __|/ _ \  \| |/ _ \ / _` |/ _ \
|  __/| |_| | \__ \  __/ |\  | (_) | (_| |  __/
|_|    \__,_|_|___/\___|_| \_|\___/ \__,_|\___|
"#;

/// Welcome text shown under the banner: features and plan overview.
pub fn entry(color: bool) -> String {
    let (bold, red, reset) = if color {
        (ansi::BOLD, ansi::FG_BRIGHT_RED, ansi::RESET)
    } else {
        ("", "", "")
    };

    let mut s = String::new();
    s.push_str(&format!("{bold}Why Choose PulseNode?{reset}\n"));
    s.push_str("------------------------------------------------\n");
    for f in FEATURES {
        s.push_str(&format!("• {red}{:<17}{reset}{}\n", f.title, f.description));
    }
    s.push_str("------------------------------------------------\n");
    for p in PLANS {
        s.push_str(&format!(
            "{red}{:<9}{reset}${}/mo or ${}/year\n",
            p.name,
            display_price(p, BillingCycle::Monthly),
            display_price(p, BillingCycle::Yearly),
        ));
    }
    s.push_str("------------------------------------------------\n");
    s.push_str(&format!("Type {bold}help{reset} or {bold}?{reset} for commands, Ctrl-D to leave\n"));
    s
}
