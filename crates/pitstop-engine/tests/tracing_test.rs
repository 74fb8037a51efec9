use pitstop_core::config::{ObservabilityConfig, PitstopConfig};
use pitstop_core::errors::PitstopError;
use pitstop_engine::tracing_setup;

// The global subscriber can only be installed once per process, so the
// whole lifecycle runs in a single test.
#[test]
fn init_validates_the_filter_and_installs_once() {
    let bad = ObservabilityConfig {
        log_level: "pitstop=loudest".into(),
        json: false,
    };
    let err = tracing_setup::init(&bad).unwrap_err();
    assert!(matches!(err, PitstopError::Config { .. }), "{err:?}");
    assert!(err.to_string().contains("invalid log filter"));

    let config = PitstopConfig::from_toml("[observability]\nlog_level = \"debug\"\n").unwrap();
    tracing_setup::init(&config.observability).unwrap();

    let err = tracing_setup::init(&config.observability).unwrap_err();
    match err {
        PitstopError::Config { reason } => assert!(reason.contains("already installed"), "{reason}"),
        other => panic!("expected a config error, got {other:?}"),
    }

    // Keeps the installed subscriber instead of failing.
    tracing_setup::init_with_filter("pitstop=trace");
    tracing::info!(target: "pitstop", "subscriber still installed");
}
