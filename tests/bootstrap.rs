use verbolog::domain_model::Verbosity;
use verbolog::infra::{MemorySink, TracingDriver};
use verbolog::logger::*;

// Installs the global subscriber, so everything lives in one test.
#[test]
fn bootstrap_subscriber_receives_gated_facade_lines() {
    let sink = MemorySink::new();
    let writer = sink.clone();
    let bootstrap = Bootstrap::try_with_writer(BOOTSTRAP_FILTER, move || writer.clone()).unwrap();
    assert!(Bootstrap::try_new(BOOTSTRAP_FILTER).is_err());
    assert!(bootstrap.reload("verbolog=notalevel").is_err());

    let log = Logger::new([
        with_verbosity(Verbosity::Info),
        with_driver(TracingDriver::new("[LOG] ")),
    ]);

    log.info("routed through tracing");
    log.debug("gated by the facade");
    let contents = sink.contents();
    assert!(contents.contains("[INFO] routed through tracing"), "{contents}");
    assert!(!contents.contains("gated by the facade"), "{contents}");

    sink.clear();
    bootstrap.reload("warn").unwrap();
    log.info("filtered by the subscriber");
    log.error("disk full");
    let contents = sink.contents();
    assert!(!contents.contains("filtered by the subscriber"), "{contents}");
    assert!(contents.contains("[ERROR] disk full"), "{contents}");
    assert_eq!(sink.lines().len(), 1, "{contents}");
}
