use super::*;

#[test]
fn test_noop_sink_accepts_messages() {
    let mut sink = NoopSink;
    sink.report("should not emit a 'never' type");
    sink.report("unhandled type literal");
}

#[test]
fn test_collector_keeps_report_order() {
    let mut collector = DiagnosticCollector::new();
    assert!(collector.is_empty());

    collector.report("anonymous type has no symbol");
    collector.report("unknown index key type");

    assert_eq!(collector.len(), 2);
    assert_eq!(
        collector.messages(),
        ["anonymous type has no symbol", "unknown index key type"]
    );
    assert!(collector.contains("index key"));
    assert!(!collector.contains("tuple"));
}

#[test]
fn test_closure_sink() {
    let mut seen = Vec::new();
    {
        let mut sink = |message: &str| seen.push(message.len());
        sink.report("abc");
        sink.report("");
    }
    assert_eq!(seen, vec![3, 0]);
}

#[test]
fn test_sink_through_trait_object() {
    let mut collector = DiagnosticCollector::new();
    {
        let sink: &mut dyn DiagnosticSink = &mut collector;
        sink.report("unhandled anonymous type");
    }
    assert_eq!(collector.messages(), ["unhandled anonymous type"]);
}
