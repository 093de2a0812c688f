use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::*;

#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/work"),
            config_dir: Some(PathBuf::from("/home/user/.config/docfinder")),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn loader_returns_default_when_no_config() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn local_config_takes_precedence_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/work/.docfinder.toml", "roots = [\"/local\"]")
        .with_file("/home/user/.config/docfinder/config.toml", "roots = [\"/user\"]");
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.roots, vec![PathBuf::from("/local")]);
}

#[test]
fn user_config_used_when_no_local_config() {
    let fs = MockFileSystem::new()
        .with_file("/home/user/.config/docfinder/config.toml", "roots = [\"/user\"]");
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.roots, vec![PathBuf::from("/user")]);
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new().with_file(
        "/etc/docfinder.toml",
        "parent_order = [\"BL\", \"POD\"]\n[report]\nmulti_code_limit = 3\n",
    );
    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/docfinder.toml"))
        .unwrap();
    assert_eq!(config.parent_order, vec!["BL", "POD"]);
    assert_eq!(config.report.multi_code_limit, 3);
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/nowhere.toml"))
        .unwrap_err();
    assert!(matches!(err, DocFinderError::Config(_)));
    assert!(err.to_string().contains("/nowhere.toml"));
}

#[test]
fn malformed_toml_is_reported() {
    let fs = MockFileSystem::new().with_file("/work/.docfinder.toml", "roots = [");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, DocFinderError::TomlParse(_)));
}

#[test]
fn invalid_values_fail_validation_on_load() {
    let fs = MockFileSystem::new().with_file("/work/.docfinder.toml", "parent_order = []");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, DocFinderError::Config(_)));
}

#[test]
fn missing_config_dir_is_tolerated() {
    let fs = MockFileSystem {
        config_dir: None,
        current_dir: PathBuf::from("/work"),
        ..MockFileSystem::default()
    };
    assert_eq!(FileConfigLoader::with_fs(fs).load().unwrap(), Config::default());
}

#[test]
fn find_config_reports_the_file_load_would_use() {
    let fs = MockFileSystem::new()
        .with_file("/home/user/.config/docfinder/config.toml", "roots = [\"/user\"]");
    let loader = FileConfigLoader::with_fs(fs);
    assert_eq!(
        loader.find_config(),
        Some(PathBuf::from("/home/user/.config/docfinder/config.toml"))
    );
}

#[test]
fn find_config_is_none_without_files() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert!(loader.find_config().is_none());
}
