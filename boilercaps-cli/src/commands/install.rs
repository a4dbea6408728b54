use std::fs;
use std::path::{Path, PathBuf};

use super::catalog::{Dependency, ProjectType};
use super::templates;
use super::toolchain::{CommandRunner, Invocation};
use super::ui;
use crate::config::ToolchainConfig;
use crate::error::ScaffoldError;

/// The generator call for `project_type`.
///
/// Frontend generators run through the package runner from `base_dir`
/// (`npx create-react-app <name>`). The express generator runs inside the
/// already-created project directory (`express --no-view`).
pub fn generator_invocation(
    project_type: ProjectType,
    name: &str,
    base_dir: &Path,
    config: &ToolchainConfig,
) -> Invocation {
    let tool = project_type.generator_tool();
    match project_type {
        ProjectType::Backend => Invocation::new(tool.command, &base_dir.join(name)).arg("--no-view"),
        ProjectType::Next => {
            let mut inv = Invocation::new(&config.runner, base_dir).arg(tool.command);
            if let Some(starter) = &config.next_starter {
                inv = inv.arg("-e").arg(starter);
            }
            inv.arg(name)
        }
        _ => Invocation::new(&config.runner, base_dir)
            .arg(tool.command)
            .arg(name),
    }
}

/// Produce the initial project tree and return its directory.
///
/// Refuses to touch an existing directory. For the backend the directory is
/// created here, since `express` generates into the current directory.
pub fn generate(
    project_type: ProjectType,
    name: &str,
    base_dir: &Path,
    runner: &dyn CommandRunner,
    config: &ToolchainConfig,
) -> Result<PathBuf, ScaffoldError> {
    let project_dir = base_dir.join(name);
    if project_dir.exists() {
        return Err(ScaffoldError::DirectoryExists(project_dir));
    }

    if project_type == ProjectType::Backend {
        fs::create_dir(&project_dir)?;
    }

    runner.run(&generator_invocation(project_type, name, base_dir, config))?;
    Ok(project_dir)
}

/// Install `deps` one by one inside `project_dir`, in the given order.
///
/// A dependency's post-install template is written right after its own
/// install succeeds. The first failure stops the loop; packages installed
/// before it are left in place. Returns the template files written.
pub fn install_dependencies(
    project_dir: &Path,
    deps: &[&Dependency],
    runner: &dyn CommandRunner,
    config: &ToolchainConfig,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut written = Vec::new();

    for dep in deps {
        ui::step(&format!("Installing {}...", dep.name));
        runner.run(&config.install(dep.name, project_dir))?;

        if let Some(action) = dep.post_install {
            let path = templates::emit(project_dir, action.template())?;
            ui::success(&format!(
                "Generated {}",
                action.template().relative_path().display()
            ));
            written.push(path);
        }
    }

    Ok(written)
}
