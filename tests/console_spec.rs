use pulsenode::commands::{AVAILABLE_COMMANDS, UNKNOWN_COMMAND};
use pulsenode::{Command, Console, Message, Role};

fn responses(log: &[Message]) -> Vec<&str> {
    log.iter()
        .filter(|m| m.role == Role::Response)
        .map(|m| m.text.as_str())
        .collect()
}

#[test]
fn known_commands_append_echo_then_response() {
    for cmd in Command::ALL {
        let console = Console::new();
        console.submit(cmd.key());

        let log = console.log();
        let expected = cmd.respond();
        assert_eq!(log.len(), 1 + expected.len(), "{}", cmd.key());
        assert_eq!(log[0], Message::echo(cmd.key()));
        for (msg, line) in log[1..].iter().zip(&expected) {
            assert_eq!(msg.role, Role::Response);
            assert_eq!(&msg.text, line);
        }
    }
}

#[test]
fn blank_input_leaves_log_unchanged() {
    let console = Console::new();
    console.submit("");
    console.submit("   ");
    assert!(console.log().is_empty());
}

#[test]
fn help_spellings_share_one_response() {
    let reference = Console::new();
    reference.submit("help");
    let expected = responses(&reference.log()).iter().map(|s| s.to_string()).collect::<Vec<_>>();

    for spelling in ["HELP", "Help", "?"] {
        let console = Console::new();
        console.submit(spelling);
        let log = console.log();
        assert_eq!(log[0].text, format!("> {spelling}"));
        assert_eq!(responses(&log), expected);
    }

    assert_eq!(expected[0], "Available commands:");
    assert_eq!(&expected[1..], AVAILABLE_COMMANDS);
}

#[test]
fn unknown_command_gets_one_guidance_line() {
    let console = Console::new();
    console.submit("/bogus");

    let log = console.log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].text, UNKNOWN_COMMAND);
    assert!(log[1].text.contains("/help"));
    assert!(log[1].text.contains('?'));
}

#[test]
fn slash_help_is_unknown() {
    let console = Console::new();
    console.submit("/help");
    assert_eq!(responses(&console.log()), vec![UNKNOWN_COMMAND]);
}

#[test]
fn plans_lists_header_and_three_plans() {
    let console = Console::new();
    console.submit("/plans");

    assert_eq!(
        responses(&console.log()),
        vec![
            "Available plans:",
            "Basic: 2GB RAM, 1 vCPU, 20GB SSD - $5/mo",
            "Standard: 4GB RAM, 2 vCPU, 40GB SSD - $10/mo",
            "Premium: 8GB RAM, 4 vCPU, 80GB SSD - $20/mo",
        ]
    );
}

#[test]
fn log_only_grows() {
    let console = Console::new();
    let mut last = 0;
    for input in ["/status", "", "/uptime", "nope", "?", "/SOCIAL"] {
        console.submit(input);
        let now = console.log().len();
        assert!(now >= last);
        last = now;
    }
    // echo + one line for each single-line reply, echo + full listing for "?"
    let help = 1 + Command::Help.respond().len();
    assert_eq!(help, 11);
    assert_eq!(last, 2 + 0 + 2 + 2 + help + 2);
}

#[test]
fn subscribers_mirror_the_log() {
    use std::sync::{Arc, Mutex};

    let console = Console::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    console.subscribe(move |m| sink.lock().unwrap().push(m.clone()));

    console.submit("/discord");
    console.submit("what");

    assert_eq!(*seen.lock().unwrap(), console.log());
}
