use crate::library::{
    config::{ConfigUpdate, LibConfig, LibOptions},
    facade::LobeLib,
    integration_tests::helper::CapturedMessages,
};

#[tokio::test(start_paused = true)]
async fn emits_once_when_debug_enabled() {
    let (captured, _guard) = CapturedMessages::install();
    let lib = LobeLib::with_options(
        LibOptions::new()
            .config(LibConfig::new("test", "1.0.0").debug(true))
            .timeout_ms(100),
    );

    lib.process_data("test").await;

    assert_eq!(captured.messages(), vec!["Processing data: test".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn text_is_emitted_verbatim() {
    let (captured, _guard) = CapturedMessages::install();
    let lib = LobeLib::with_options(
        LibOptions::new()
            .config(LibConfig::new("test", "1.0.0").debug(true))
            .timeout_ms(10),
    );

    lib.process_data("say \"hi\"").await;
    lib.process_data(String::from("line\tbreak")).await;
    lib.process_data(vec![1, 2]).await;

    assert_eq!(
        captured.messages(),
        vec![
            "Processing data: say \"hi\"".to_string(),
            "Processing data: line\tbreak".to_string(),
            "Processing data: [1, 2]".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn silent_when_debug_disabled() {
    let (captured, _guard) = CapturedMessages::install();
    let lib = LobeLib::with_options(
        LibOptions::new()
            .config(LibConfig::new("test", "1.0.0").debug(false))
            .timeout_ms(100),
    );

    lib.process_data("test").await;

    assert!(captured.messages().is_empty());
}

#[tokio::test(start_paused = true)]
async fn emission_follows_updated_debug_flag() {
    let (captured, _guard) = CapturedMessages::install();
    let mut lib = LobeLib::with_options(LibOptions::new().timeout_ms(10));

    lib.process_data(1).await;
    assert!(captured.messages().is_empty());

    lib.update_config(ConfigUpdate::new().debug(true));
    lib.process_data(42).await;

    assert_eq!(captured.messages(), vec!["Processing data: 42".to_string()]);
}
