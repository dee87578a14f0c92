//! Library-level integration tests for the cleanup pipeline.

use classweave::weave::{CleanProcessor, Cleaner, Finder, WeaveEnvironment};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn write_class(root: &Path, internal_name: &str) -> PathBuf {
    let path = root.join(format!("{internal_name}.class"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"\xCA\xFE\xBA\xBE").unwrap();
    path
}

struct RecordingCleaner {
    name: &'static str,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Cleaner for RecordingCleaner {
    fn id(&self) -> &'static str {
        self.name
    }

    fn clean(&self, env: &WeaveEnvironment, finder: &Finder) -> anyhow::Result<()> {
        let seen = finder.artifacts().count();
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}:{}", self.name, env.target().display(), seen));
        Ok(())
    }
}

#[test]
fn default_discovery_finds_the_builtin_cleaner() {
    let processor = CleanProcessor::new(vec![], PathBuf::from("unused"), BTreeMap::new());
    assert!(!processor.providers().is_empty());
}

#[test]
fn end_to_end_generated_class_cleanup() {
    let tmp = TempDir::new().unwrap();
    write_class(tmp.path(), "com/example/App");
    write_class(tmp.path(), "com/example/App$$woven");
    write_class(tmp.path(), "com/example/sub/Helper$$woven");

    let processor = CleanProcessor::new(vec![], tmp.path().to_path_buf(), BTreeMap::new());
    processor.clean().unwrap();

    assert!(tmp.path().join("com/example/App.class").exists());
    assert!(!tmp.path().join("com/example/App$$woven.class").exists());
    assert!(!tmp.path().join("com/example/sub/Helper$$woven.class").exists());
}

#[test]
fn keep_list_resolves_against_the_auxiliary_search_path() {
    let target = TempDir::new().unwrap();
    let aux = TempDir::new().unwrap();
    write_class(target.path(), "a/X$$woven");
    // The keep entry lives on the auxiliary path, not in the target.
    write_class(aux.path(), "lib/Support");

    let mut properties = BTreeMap::new();
    properties.insert("clean.keep".to_string(), "lib.Support".to_string());

    let processor = CleanProcessor::new(
        vec![aux.path().to_path_buf()],
        target.path().to_path_buf(),
        properties,
    );
    processor.clean().unwrap();

    assert!(!target.path().join("a/X$$woven.class").exists());
}

#[test]
fn injected_providers_see_the_shared_artifact_index() {
    let tmp = TempDir::new().unwrap();
    write_class(tmp.path(), "a/A");
    write_class(tmp.path(), "a/B");

    let calls = Arc::new(Mutex::new(Vec::new()));
    let processor = CleanProcessor::with_providers(
        vec![],
        tmp.path().to_path_buf(),
        BTreeMap::new(),
        vec![
            Box::new(RecordingCleaner {
                name: "one",
                calls: Arc::clone(&calls),
            }),
            Box::new(RecordingCleaner {
                name: "two",
                calls: Arc::clone(&calls),
            }),
        ],
    );

    processor.clean().unwrap();

    let calls = calls.lock().unwrap();
    let expected_prefixes = ["one:", "two:"];
    assert_eq!(calls.len(), 2);
    for (call, prefix) in calls.iter().zip(expected_prefixes) {
        assert!(call.starts_with(prefix), "unexpected call record: {call}");
        assert!(call.ends_with(":2"), "each provider should see both classes");
    }
}

#[test]
fn missing_target_runs_as_noop_with_injected_providers() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let processor = CleanProcessor::with_providers(
        vec![],
        PathBuf::from("/nonexistent/classes"),
        BTreeMap::new(),
        vec![Box::new(RecordingCleaner {
            name: "never",
            calls: Arc::clone(&calls),
        })],
    );

    processor.clean().unwrap();
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn provider_failure_propagates_from_clean() {
    struct FailingCleaner;

    impl Cleaner for FailingCleaner {
        fn id(&self) -> &'static str {
            "failing"
        }

        fn clean(&self, _env: &WeaveEnvironment, _finder: &Finder) -> anyhow::Result<()> {
            anyhow::bail!("deliberate failure")
        }
    }

    let tmp = TempDir::new().unwrap();
    write_class(tmp.path(), "a/A");

    let processor = CleanProcessor::with_providers(
        vec![],
        tmp.path().to_path_buf(),
        BTreeMap::new(),
        vec![Box::new(FailingCleaner)],
    );

    let err = processor.clean().unwrap_err();
    assert!(err.to_string().contains("failing"));
}
