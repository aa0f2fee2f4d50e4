use parking_lot::Mutex;
use pulsenode::state::boot::{BOOT_INTERVAL, BOOT_SCRIPT};
use pulsenode::{Console, Message, Role};
use std::sync::Arc;
use std::time::Duration;

fn boot_lines(log: &[Message]) -> Vec<String> {
    log.iter().filter(|m| m.role == Role::Boot).map(|m| m.text.clone()).collect()
}

#[tokio::test(start_paused = true)]
async fn boot_plays_every_line_then_stops() {
    let console = Console::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let task = console.start_boot_sequence(BOOT_INTERVAL, move |m| sink.lock().push(m.text.clone()));
    task.join().await;

    let log = console.log();
    assert_eq!(log.len(), BOOT_SCRIPT.len());
    assert_eq!(boot_lines(&log), BOOT_SCRIPT);
    assert_eq!(*seen.lock(), BOOT_SCRIPT);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(console.log().len(), 9);
}

#[tokio::test(start_paused = true)]
async fn boot_reveals_one_line_per_interval() {
    let console = Console::new();
    let task = console.start_boot_sequence(BOOT_INTERVAL, |_| {});

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(console.log().len(), 0);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(console.log().len(), 1);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(console.log().len(), 2);

    task.cancel();
}

#[tokio::test(start_paused = true)]
async fn cancel_after_three_lines() {
    let console = Console::new();
    let task = console.start_boot_sequence(BOOT_INTERVAL, |_| {});

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(console.log().len(), 3);

    task.cancel();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(boot_lines(&console.log()), &BOOT_SCRIPT[..3]);
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_boot() {
    let console = Console::new();
    let task = console.start_boot_sequence(BOOT_INTERVAL, |_| {});

    tokio::time::sleep(Duration::from_millis(1600)).await;
    console.shutdown();
    task.join().await;

    assert_eq!(console.log().len(), 3);
    console.submit("help");
    assert_eq!(console.log().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn submits_interleave_with_boot_without_corruption() {
    let console = Console::new();
    let task = console.start_boot_sequence(Duration::from_millis(10), |_| {});

    for i in 0..40 {
        console.submit(if i % 2 == 0 { "help" } else { "/status" });
        tokio::time::sleep(Duration::from_millis(3)).await;
    }
    task.join().await;

    let log = console.log();
    assert_eq!(boot_lines(&log), BOOT_SCRIPT);
    assert_contiguous_replies(&log);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submits_keep_streams_intact() {
    let console = Arc::new(Console::new());
    let task = console.start_boot_sequence(Duration::from_millis(1), |_| {});

    let mut workers = Vec::new();
    for w in 0..4 {
        let console = console.clone();
        workers.push(tokio::spawn(async move {
            for i in 0..50 {
                console.submit(if (i + w) % 3 == 0 { "?" } else { "/plans" });
                tokio::task::yield_now().await;
            }
        }));
    }
    for w in workers {
        w.await.unwrap();
    }
    task.join().await;

    let log = console.log();
    assert_eq!(boot_lines(&log), BOOT_SCRIPT);
    assert_eq!(log.iter().filter(|m| m.role == Role::Input).count(), 200);
    assert_contiguous_replies(&log);
}

/// Every echo is directly followed by its full reply, with no boot line in between.
fn assert_contiguous_replies(log: &[Message]) {
    let mut i = 0;
    while i < log.len() {
        if log[i].role != Role::Input {
            i += 1;
            continue;
        }
        let raw = log[i].text.trim_start_matches("> ");
        let expected = pulsenode::process_command(raw).lines;
        let reply: Vec<&str> = log[i + 1..i + 1 + expected.len()].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(reply, expected, "reply to {raw:?} was split");
        assert!(log[i + 1..i + 1 + expected.len()].iter().all(|m| m.role == Role::Response));
        i += 1 + expected.len();
    }
}
