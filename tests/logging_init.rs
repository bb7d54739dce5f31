//! Глобальный subscriber ставится один раз на процесс, поэтому здесь
//! ровно один тест.

use barmenu::{decode, init_logging, Composition, LogFormat, LoggingConfig, LoggingError};

#[test]
fn test_init_logging_once() {
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Compact,
        with_ansi: false,
        ..LoggingConfig::default()
    };

    let handle = init_logging(config.clone()).unwrap();
    assert_eq!(handle.config().format, LogFormat::Compact);
    assert!(handle.current_filter().is_some());

    handle.reload_filter("warn,barmenu::codec=trace").unwrap();
    let current = handle.current_filter().unwrap();
    assert!(current.contains("barmenu::codec=trace"), "{current}");
    assert!(handle.reload_filter("barmenu=notalevel").is_err());

    // Декодер пишет в установленный subscriber.
    assert!(decode::<Composition>("(0,{},{},{})").is_ok());

    assert!(matches!(init_logging(config), Err(LoggingError::Init(_))));
}
