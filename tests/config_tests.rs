use ollama_nodes::Error;
use ollama_nodes::config::{self, Config};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn defaults_apply_to_empty_sections() {
    let config: Config = serde_yaml::from_str("ollama: {}\nlogs: {}\n").unwrap();

    assert_eq!(config.ollama.url, "http://127.0.0.1:11434");
    assert_eq!(config.ollama.model, None);
    assert_eq!(config.ollama.timeout_secs, 300);
    assert_eq!(config.logs.level, "info");
}

#[test]
fn explicit_values_override_defaults() {
    let yaml = r#"
ollama:
  url: http://gpu-box:11434
  model: llava:13b
  timeout_secs: 60
logs:
  level: debug
"#;

    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.ollama.url, "http://gpu-box:11434");
    assert_eq!(config.ollama.model.as_deref(), Some("llava:13b"));
    assert_eq!(config.ollama.timeout_secs, 60);
    assert_eq!(config.logs.level, "debug");
}

// Single test for everything CONFIG_PATH-dependent: the env var is process
// global, so the scenarios run sequentially here instead of racing across
// parallel test threads.
#[tokio::test]
async fn load_honors_config_path_and_falls_back_to_defaults() {
    // Explicitly configured file is read.
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ollama:\n  model: mistral:latest").unwrap();

    unsafe {
        std::env::set_var("CONFIG_PATH", file.path());
    }

    let config = config::load().await.unwrap();
    assert_eq!(config.ollama.model.as_deref(), Some("mistral:latest"));
    assert_eq!(config.ollama.url, "http://127.0.0.1:11434");

    // An explicitly configured path that does not exist is an error
    // naming the attempted path.
    unsafe {
        std::env::set_var("CONFIG_PATH", "/nonexistent/nodes.yaml");
    }

    let err = config::load().await.unwrap_err();
    match err {
        Error::Config(message) => assert!(message.contains("/nonexistent/nodes.yaml")),
        other => panic!("expected Config error, got {:?}", other),
    }

    // A malformed file is a parse error naming the path.
    let mut bad = NamedTempFile::new().unwrap();
    writeln!(bad, "ollama: [not, a, mapping]").unwrap();

    unsafe {
        std::env::set_var("CONFIG_PATH", bad.path());
    }

    let err = config::load().await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    // Without CONFIG_PATH and with no config.yaml in the working
    // directory, built-in defaults apply.
    unsafe {
        std::env::remove_var("CONFIG_PATH");
    }

    let config = config::load().await.unwrap();
    assert_eq!(config.ollama.url, "http://127.0.0.1:11434");
    assert_eq!(config.ollama.model, None);
    assert_eq!(config.ollama.timeout_secs, 300);
    assert_eq!(config.logs.level, "info");
}
