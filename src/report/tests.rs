use super::*;
use crate::utils::{AccessEvent, AccessLogError};

use mockall::mock;
use mockall::predicate::*;

use std::io::Read;
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

mock! {
    pub Lookup {}
    impl ProcessNameLookup for Lookup {
        fn process_name(&self, pid: u32) -> Result<String>;
    }
}

#[derive(Default)]
struct Captured(Mutex<Vec<String>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl WarnSink for Captured {
    fn warn(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

fn named(pid: u32, name: &'static str) -> MockLookup {
    let mut lookup = MockLookup::new();
    lookup
        .expect_process_name()
        .with(eq(pid))
        .times(1)
        .returning(move |_| Ok(name.to_string()));
    lookup
}

fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}

fn collect_one(listener: TcpListener) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        conn.read_to_end(&mut buf).unwrap();
        buf
    })
}

#[test]
fn empty_endpoint_only_logs() {
    let sink = Captured::default();
    let reporter = Reporter::with_parts(named(1234, "weed"), &sink);

    reporter.report_access("", AccessType::Read, "/data/vol1/x.dat", 4096, 1234);

    assert_eq!(
        sink.lines(),
        vec!["Access log:  READ /data/vol1/x.dat 4096 weed".to_string()]
    );
}

#[test]
fn resolution_failure_uses_pid_label() {
    let mut lookup = MockLookup::new();
    lookup
        .expect_process_name()
        .with(eq(77))
        .times(1)
        .returning(|pid| Err(AccessLogError::ProcessGone(pid)));
    let sink = Captured::default();

    Reporter::with_parts(lookup, &sink).report_access("", AccessType::Open, "/f", 1, 77);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Error getting process name: Process 77 no longer exists");
    assert_eq!(lines[1], "Access log:  OPEN /f 1 PID 77");
}

#[test]
fn closed_port_logs_and_returns() {
    let endpoint = closed_port();
    let sink = Captured::default();
    let reporter = Reporter::with_parts(named(1234, "weed"), &sink);

    let started = Instant::now();
    reporter.report_access(&endpoint, AccessType::Read, "/data/vol1/x.dat", 4096, 1234);
    assert!(started.elapsed() < Duration::from_secs(10));

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!("Access log: {} READ /data/vol1/x.dat 4096 weed", endpoint)
    );
    assert!(lines[1].starts_with(&format!("Cannot connect to {}", endpoint)));
}

#[test]
fn endpoint_without_port_is_a_connect_failure() {
    let sink = Captured::default();
    let reporter =
        Reporter::with_parts(named(1, "init"), &sink).with_timeout(Duration::from_millis(200));

    reporter.report_access("127.0.0.1", AccessType::Write, "/x", 0, 1);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Cannot connect to 127.0.0.1"));
}

#[test]
fn collector_receives_exact_record() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = listener.local_addr().unwrap().to_string();
    let received = collect_one(listener);

    let sink = Captured::default();
    Reporter::with_parts(named(42, "volume"), &sink).report_access(
        &endpoint,
        AccessType::Write,
        "/data/vol1/7,01637037d6.dat",
        1 << 40,
        42,
    );

    let payload = received.join().unwrap();
    let event = AccessEvent::decode_payload(&payload).unwrap();
    assert_eq!(
        event,
        AccessEvent::new(
            AccessType::Write,
            "/data/vol1/7,01637037d6.dat",
            1 << 40,
            42,
            "volume"
        )
    );
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn bounded_timeout_still_delivers() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = listener.local_addr().unwrap().to_string();
    let received = collect_one(listener);

    let sink = Captured::default();
    Reporter::with_parts(named(9, "fio"), &sink)
        .with_timeout(Duration::from_secs(2))
        .report_access(&endpoint, AccessType::Read, "/bench", 512, 9);

    let event = AccessEvent::decode_payload(&received.join().unwrap()).unwrap();
    assert_eq!(event.process_name(), "fio");
    assert_eq!(event.file_size(), 512);
}

#[test]
fn every_call_resolves_again() {
    let mut lookup = MockLookup::new();
    lookup
        .expect_process_name()
        .with(eq(5))
        .times(3)
        .returning(|_| Ok("rsync".to_string()));
    let sink = Captured::default();
    let reporter = Reporter::with_parts(lookup, &sink);

    for _ in 0..3 {
        reporter.report_access("", AccessType::Read, "/same", 1, 5);
    }
    assert_eq!(sink.lines().len(), 3);
}

#[test]
fn zero_timeout_keeps_os_defaults() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = listener.local_addr().unwrap().to_string();
    let received = collect_one(listener);

    let sink = Captured::default();
    Reporter::with_parts(named(8, "tar"), &sink)
        .with_timeout(Duration::ZERO)
        .report_access(&endpoint, AccessType::Read, "/archive", 64, 8);

    let event = AccessEvent::decode_payload(&received.join().unwrap()).unwrap();
    assert_eq!(event.process_name(), "tar");
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn collector_hangup_logs_write_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = listener.local_addr().unwrap().to_string();
    let hangup = thread::spawn(move || {
        // close without reading so the peer resets the connection
        let (conn, _) = listener.accept().unwrap();
        drop(conn);
    });

    // larger than the loopback socket buffers, so the write cannot finish
    // before the reset arrives
    let path = "x".repeat(32 << 20);
    let sink = Captured::default();
    Reporter::with_parts(named(6, "cp"), &sink)
        .with_timeout(Duration::from_secs(5))
        .report_access(&endpoint, AccessType::Write, &path, 1, 6);
    hangup.join().unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Access log: "));
    assert!(lines[1].starts_with("Cannot send access info"));
}
