//! Test utilities and shared fixtures for the ytrans workspace.
//!
//! Available to other crates through the `testing` feature.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests; safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// On-disk translation tree rooted in a temporary directory.
///
/// The directory is removed when the value is dropped.
#[cfg(feature = "tempfile")]
pub struct TranslationTree {
    dir: tempfile::TempDir,
}

#[cfg(feature = "tempfile")]
impl TranslationTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temporary directory"),
        }
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates (if needed) and returns the directory of `group`.
    pub fn group(&self, group: &str) -> PathBuf {
        let path = self.dir.path().join(group);
        fs::create_dir_all(&path).expect("Failed to create group directory");
        path
    }

    /// Writes `content` to `<root>/<group>/<file_name>`.
    pub fn file(&self, group: &str, file_name: &str, content: &str) -> &Self {
        let path = self.group(group).join(file_name);
        fs::write(&path, content).expect("Failed to write translation file");
        self
    }

    /// Writes `content` directly under the root (not inside a group).
    pub fn root_file(&self, file_name: &str, content: &str) -> &Self {
        fs::write(self.dir.path().join(file_name), content).expect("Failed to write root file");
        self
    }

    /// The two-language `site` group used throughout the test suites.
    pub fn site() -> Self {
        let tree = Self::new();
        tree.file("site", "en.yaml", fixtures::SITE_EN)
            .file("site", "fr.yaml", fixtures::SITE_FR);
        tree
    }
}

#[cfg(feature = "tempfile")]
impl Default for TranslationTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Translation file contents reused across tests.
pub mod fixtures {
    /// English `site` translations.
    pub const SITE_EN: &str = r#"
home:
  title: Welcome
  greeting: "Hello, {name}!"
  menu:
    open: Open
    close: Close
footer: "(c) {year}"
"#;

    /// French `site` translations.
    pub const SITE_FR: &str = r#"
home:
  title: Bienvenue
  greeting: "Bonjour, {name} !"
  menu:
    open: Ouvrir
    close: Fermer
footer: "(c) {year}"
"#;

    /// English `errors` translations with mixed leaf types.
    pub const ERRORS_EN: &str = r#"
http:
  not_found:
    code: 404
    message: "Page {page} was not found"
    retry: false
  server: "Internal error"
codes: [400, 404, 500]
"#;

    /// A file that does not parse as YAML.
    pub const MALFORMED: &str = "home: [unclosed\n  title: x";
}
