use crate::diagnostics::DiagnosticIds;
use crate::diagnostics::DiagnosticSink;
use crate::diagnostics::Severity;
use std::sync::Arc;
use std::sync::Mutex;

type Recorded = Arc<Mutex<Vec<(String, DiagnosticIds, Severity)>>>;

fn recording_sink() -> (DiagnosticSink, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(vec![]));
    let handler_recorded = Arc::clone(&recorded);
    let sink = DiagnosticSink::with_handler(
        move |message: &str, id: DiagnosticIds, severity: Severity| {
            handler_recorded.lock().unwrap().push((message.to_string(), id, severity));
        },
    );
    (sink, recorded)
}

#[test]
fn all_ids_are_enabled_by_default() {
    let (sink, _) = recording_sink();
    assert_eq!(sink.enabled_ids(), DiagnosticIds::ALL);
    assert_eq!(DiagnosticIds::ALL.bits(), 63);
    assert!(sink.is_enabled(DiagnosticIds::FULL_SCHEMA_SCAN));
}

#[test]
fn warn_emits_every_time() {
    let (sink, recorded) = recording_sink();
    sink.warn("first", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);
    sink.warn("second", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].0, "first");
    assert_eq!(recorded[1].0, "second");
    assert_eq!(recorded[1].1, DiagnosticIds::FULL_SCHEMA_SCAN);
}

#[test]
fn warn_once_emits_once_per_id() {
    let (sink, recorded) = recording_sink();
    sink.warn_once("scan 1", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);
    sink.warn_once("scan 2", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);
    sink.warn_once("config", DiagnosticIds::CONFIG, Severity::Notice);

    let recorded = recorded.lock().unwrap();
    let messages: Vec<&str> = recorded.iter().map(|(msg, _, _)| msg.as_str()).collect();
    assert_eq!(messages, vec!["scan 1", "config"]);
    assert_eq!(recorded[1].2, Severity::Notice);
}

#[test]
fn suppression_applies_to_custom_handlers() {
    let (sink, recorded) = recording_sink();
    sink.suppress(DiagnosticIds::FULL_SCHEMA_SCAN);
    sink.warn("scan", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);
    sink.warn_once("scan", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);
    sink.warn("assign", DiagnosticIds::ASSIGN, Severity::Warning);

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].1, DiagnosticIds::ASSIGN);
}

#[test]
fn suppressed_warn_once_does_not_consume_the_once() {
    let (sink, recorded) = recording_sink();
    sink.suppress(DiagnosticIds::FULL_SCHEMA_SCAN);
    sink.warn_once("hidden", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);
    sink.enable(DiagnosticIds::FULL_SCHEMA_SCAN);
    sink.warn_once("shown", DiagnosticIds::FULL_SCHEMA_SCAN, Severity::Warning);

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "shown");
}

#[test]
fn suppress_all_and_enable_all() {
    let (sink, recorded) = recording_sink();
    sink.suppress_all();
    assert!(!sink.is_enabled(DiagnosticIds::ALL));
    sink.warn("nope", DiagnosticIds::CONFIG, Severity::Warning);

    sink.enable_all();
    assert_eq!(sink.enabled_ids(), DiagnosticIds::ALL);
    sink.warn("yep", DiagnosticIds::CONFIG, Severity::Warning);

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "yep");
}

#[test]
fn sinks_do_not_share_state() {
    let (sink1, recorded1) = recording_sink();
    let (sink2, recorded2) = recording_sink();
    sink1.suppress(DiagnosticIds::CONFIG);
    sink1.warn_once("a", DiagnosticIds::ASSIGN, Severity::Warning);
    sink2.warn_once("a", DiagnosticIds::ASSIGN, Severity::Warning);
    sink2.warn("b", DiagnosticIds::CONFIG, Severity::Warning);

    assert_eq!(recorded1.lock().unwrap().len(), 1);
    assert_eq!(recorded2.lock().unwrap().len(), 2);
}
