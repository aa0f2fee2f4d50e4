// Canned single-line answers.
pub const STATUS: &[&str] = &["All systems operational. Current server load: 42%"];
pub const UPTIME: &[&str] = &["Current uptime: 99.99% over the last 30 days"];
pub const SPECS: &[&str] = &["Our servers use the latest AMD EPYC processors and NVMe SSDs for optimal performance"];
pub const SUPPORT: &[&str] = &["For support, please email support@pulsenode.net or use our 24/7 live chat on the website"];
pub const DISCORD: &[&str] = &["Join our Discord community: https://discord.gg/pulsenode"];
pub const TUTORIALS: &[&str] = &["Check out our video tutorials at https://pulsenode.net/tutorials"];
pub const SOCIAL: &[&str] = &["Follow us on Twitter: @PulseNode, Instagram: @PulseNodeHosting"];

pub fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}
