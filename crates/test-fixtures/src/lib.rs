//! Test fixture loader for Pitstop golden conversations.
//!
//! Fixture data lives in the workspace-level `test-fixtures/` directory so
//! every crate's tests can share it.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Directory of golden conversation fixtures, relative to the fixtures root.
pub const CONVERSATIONS_DIR: &str = "golden/conversations";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Walk up from this crate to the workspace root holding the data.
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(manifest_dir);

    while !path.join("test-fixtures").join("golden").is_dir() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden directory from {}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// A scripted conversation and the stages it must pass through.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationFixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub turns: Vec<ConversationTurn>,
    /// Expected `VehicleProfile::describe()` after the last turn.
    #[serde(default)]
    pub final_vehicle: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationTurn {
    pub user: String,
    /// Assistant reply recorded after the user turn, if any.
    #[serde(default)]
    pub assistant: Option<String>,
    /// Stage name in snake_case, e.g. `problem_description`.
    pub expected_state: String,
    #[serde(default)]
    pub expected_topic: Option<String>,
}

/// Load every golden conversation.
pub fn load_conversations() -> Vec<ConversationFixture> {
    list_fixtures(CONVERSATIONS_DIR)
        .iter()
        .map(|path| {
            let relative = path
                .strip_prefix(fixtures_root())
                .unwrap_or_else(|e| panic!("fixture outside root {}: {}", path.display(), e));
            load_fixture(&relative.to_string_lossy())
        })
        .collect()
}
