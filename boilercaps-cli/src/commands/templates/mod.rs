pub mod project;

use std::fs;
use std::path::{Path, PathBuf};

/// A static file that can be dropped into a project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    EnvFile,
    ConnectionStub,
    VercelManifest,
}

impl Template {
    /// Location relative to the project root.
    pub fn relative_path(self) -> &'static Path {
        match self {
            Template::EnvFile => Path::new(".env"),
            Template::ConnectionStub => Path::new("models/connection.js"),
            Template::VercelManifest => Path::new("vercel.json"),
        }
    }

    pub fn contents(self) -> &'static str {
        match self {
            Template::EnvFile => project::ENV_FILE,
            Template::ConnectionStub => project::CONNECTION_JS,
            Template::VercelManifest => project::VERCEL_JSON,
        }
    }
}

/// Write `template` under `project_dir`, creating missing parent
/// directories first. Returns the path written.
pub fn emit(project_dir: &Path, template: Template) -> std::io::Result<PathBuf> {
    let path = project_dir.join(template.relative_path());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, template.contents())?;
    tracing::debug!(path = %path.display(), "template written");
    Ok(path)
}
