pub const AVAILABLE_COMMANDS: &[&str] = &[
    "/help",
    "/status",
    "/plans",
    "/uptime",
    "/specs",
    "/support",
    "/discord",
    "/tutorials",
    "/social",
];

pub fn help() -> Vec<String> {
    std::iter::once("Available commands:")
        .chain(AVAILABLE_COMMANDS.iter().copied())
        .map(String::from)
        .collect()
}
