//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::FILESYSTEM);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common settings snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Filesystem strategy over `templates/`.
    pub const FILESYSTEM: &str = r#"
loaders: [filesystem]
dirs: [templates]
"#;

    /// Both strategies, with nested loader tokens and two apps.
    pub const NESTED_BOTH: &str = r#"
loaders:
  - - django.template.loaders.cached.Loader
    - - app_directories
      - filesystem
dirs: [templates]
apps: [blog, shop]
"#;

    /// No recognized loader tokens.
    pub const NOTHING_ENABLED: &str = r#"
loaders: [cached, locmem]
dirs: [templates]
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "loaders: [filesystem\n";
}

/// A temporary directory holding a settings file and a template tree.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.template-graph.yaml` settings file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".template-graph.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a binary file with the given path and content.
    pub fn with_binary_file(self, path: &str, content: &[u8]) -> Self {
        self.temp_dir
            .child(path)
            .write_binary(content)
            .expect("Failed to write binary file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the fixture.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.join(".template-graph.yaml")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("template-graph");
        cmd.current_dir(self.path());
        cmd.env_remove("TEMPLATE_GRAPH_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
