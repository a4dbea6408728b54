use colored::Colorize;
use std::path::{Path, PathBuf};

use super::catalog::{self, Category, Dependency, ProjectType};
use super::install;
use super::prompt::{Prompter, TerminalPrompter};
use super::templates::{self, Template};
use super::toolchain::{self, CommandRunner, PathProbe, SystemRunner, ToolProbe};
use super::ui;
use crate::config::ToolchainConfig;
use crate::error::ScaffoldError;

/// Answers for the frontend half of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendPlan {
    pub name: String,
    pub project_type: ProjectType,
    pub dependencies: Vec<&'static Dependency>,
}

/// Answers for the backend half of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendPlan {
    pub name: String,
    pub dependencies: Vec<&'static Dependency>,
    pub deploy_vercel: bool,
}

/// Every answer of a run, gathered before anything is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPlan {
    pub frontend: Option<FrontendPlan>,
    pub backend: Option<BackendPlan>,
}

/// What a run produced on disk.
#[derive(Debug, Default)]
pub struct Report {
    /// Generated project directories, in creation order.
    pub projects: Vec<PathBuf>,
    /// Template files written inside them.
    pub files: Vec<PathBuf>,
}

/// One interactive run, wired to its collaborators.
///
/// Projects are created under `base_dir`.
pub struct Session<'a> {
    prompter: &'a dyn Prompter,
    runner: &'a dyn CommandRunner,
    probe: &'a dyn ToolProbe,
    config: &'a ToolchainConfig,
    base_dir: PathBuf,
}

impl<'a> Session<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        runner: &'a dyn CommandRunner,
        probe: &'a dyn ToolProbe,
        config: &'a ToolchainConfig,
        base_dir: &Path,
    ) -> Self {
        Self {
            prompter,
            runner,
            probe,
            config,
            base_dir: base_dir.to_path_buf(),
        }
    }

    /// Banner, questions, execution, summary.
    pub fn run(&self) -> Result<Report, ScaffoldError> {
        ui::banner();
        let plan = self.collect()?;
        let report = self.execute(&plan)?;
        print_summary(&report, &self.base_dir);
        ui::footer();
        Ok(report)
    }

    /// Ask every question of the run. No command runs and nothing is
    /// written here, so backing out leaves no trace.
    pub fn collect(&self) -> Result<ProjectPlan, ScaffoldError> {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let idx = self
            .prompter
            .select("What kind of project do you want to create?", &labels, 0)?;
        let category = *Category::ALL
            .get(idx)
            .ok_or(ScaffoldError::Cancelled)?;
        tracing::debug!(category = category.label(), "category selected");

        let mut plan = ProjectPlan::default();
        if category.includes_frontend() {
            plan.frontend = Some(self.ask_frontend()?);
        }
        if category.includes_backend() {
            let taken = plan.frontend.as_ref().map(|f| f.name.as_str());
            plan.backend = Some(self.ask_backend(taken)?);
        }
        Ok(plan)
    }

    fn ask_frontend(&self) -> Result<FrontendPlan, ScaffoldError> {
        let name = self.prompter.input(
            "Name of your frontend project",
            ProjectType::React.default_name(),
        )?;
        let name = validate_name(&name)?;

        let labels: Vec<&str> = ProjectType::FRONTEND.iter().map(|t| t.label()).collect();
        let idx = self
            .prompter
            .select("Which framework?", &labels, 0)?;
        let project_type = *ProjectType::FRONTEND
            .get(idx)
            .ok_or(ScaffoldError::Cancelled)?;

        let dependencies =
            self.ask_dependencies(project_type, "Which additional dependencies do you want?")?;

        Ok(FrontendPlan {
            name,
            project_type,
            dependencies,
        })
    }

    /// `taken` is the frontend name of a full-stack run; both projects are
    /// created side by side, so the backend cannot reuse it.
    fn ask_backend(&self, taken: Option<&str>) -> Result<BackendPlan, ScaffoldError> {
        let name = self.prompter.input(
            "Name of your backend project",
            ProjectType::Backend.default_name(),
        )?;
        let name = validate_name(&name)?;
        if taken == Some(name.as_str()) {
            return Err(ScaffoldError::InvalidName(name));
        }

        let dependencies =
            self.ask_dependencies(ProjectType::Backend, "Which backend dependencies do you want?")?;

        let deploy_vercel = self
            .prompter
            .confirm("Do you want to deploy to Vercel?", false)?;

        Ok(BackendPlan {
            name,
            dependencies,
            deploy_vercel,
        })
    }

    /// Multi-select over the table for `project_type`. The result follows
    /// the order of the returned indices; repeated indices count once.
    fn ask_dependencies(
        &self,
        project_type: ProjectType,
        prompt: &str,
    ) -> Result<Vec<&'static Dependency>, ScaffoldError> {
        let table = catalog::dependencies(project_type);
        let labels: Vec<&str> = table.iter().map(|d| d.name).collect();
        let picked = self.prompter.multi_select(prompt, &labels)?;

        let mut selected: Vec<&'static Dependency> = Vec::with_capacity(picked.len());
        for idx in picked {
            match table.get(idx) {
                Some(dep) if !selected.iter().any(|d| d.name == dep.name) => selected.push(dep),
                Some(_) => {}
                None => tracing::warn!(index = idx, "ignoring out-of-range selection"),
            }
        }
        Ok(selected)
    }

    /// Run the plan: frontend first, then backend.
    ///
    /// Every target directory is checked before any tool is probed,
    /// installed or run.
    pub fn execute(&self, plan: &ProjectPlan) -> Result<Report, ScaffoldError> {
        let mut report = Report::default();
        if plan.frontend.is_none() && plan.backend.is_none() {
            return Ok(report);
        }

        let names = plan
            .frontend
            .iter()
            .map(|f| f.name.as_str())
            .chain(plan.backend.iter().map(|b| b.name.as_str()));
        for name in names {
            let dir = self.base_dir.join(name);
            if dir.exists() {
                return Err(ScaffoldError::DirectoryExists(dir));
            }
        }
        if let (Some(frontend), Some(backend)) = (&plan.frontend, &plan.backend) {
            if frontend.name == backend.name {
                return Err(ScaffoldError::InvalidName(backend.name.clone()));
            }
        }

        toolchain::require_package_manager(self.probe, self.config)?;

        if let Some(frontend) = &plan.frontend {
            ui::step(&format!(
                "Creating a new {} project named \"{}\"...",
                frontend.project_type, frontend.name
            ));
            let dir = self.build(frontend.project_type, &frontend.name, &frontend.dependencies, &mut report)?;
            ui::success(&format!("Frontend project {} created", dir.display()));
        }

        if let Some(backend) = &plan.backend {
            ui::step(&format!("Creating the Express backend \"{}\"...", backend.name));
            let dir = self.build(ProjectType::Backend, &backend.name, &backend.dependencies, &mut report)?;

            if backend.deploy_vercel {
                let path = templates::emit(&dir, Template::VercelManifest)?;
                ui::success("vercel.json generated");
                report.files.push(path);
            }
            ui::success(&format!("Backend project {} created", dir.display()));
        }

        Ok(report)
    }

    fn build(
        &self,
        project_type: ProjectType,
        name: &str,
        dependencies: &[&'static Dependency],
        report: &mut Report,
    ) -> Result<PathBuf, ScaffoldError> {
        let tool = project_type.generator_tool();
        toolchain::ensure_tool(
            &tool,
            self.probe,
            self.prompter,
            self.runner,
            self.config,
            &self.base_dir,
        )?;

        let dir = install::generate(project_type, name, &self.base_dir, self.runner, self.config)?;
        report.projects.push(dir.clone());

        if !dependencies.is_empty() {
            ui::step("Installing dependencies...");
        }
        let written = install::install_dependencies(&dir, dependencies, self.runner, self.config)?;
        report.files.extend(written);

        Ok(dir)
    }
}

/// Trim a project name and reject ones that cannot name a directory.
pub fn validate_name(raw: &str) -> Result<String, ScaffoldError> {
    let name = raw.trim();
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(ScaffoldError::InvalidName(raw.to_string()));
    }
    Ok(name.to_string())
}

fn print_summary(report: &Report, base_dir: &Path) {
    if report.projects.is_empty() {
        return;
    }
    println!();
    println!("{} All done!", "✓".green());
    println!();
    for dir in &report.projects {
        let shown = dir.strip_prefix(base_dir).unwrap_or(dir);
        println!("  cd {}", shown.display());
    }
}

/// Interactive entry point: terminal prompts, real processes, projects
/// created in the current directory.
pub fn run(config: &ToolchainConfig) -> Result<(), ScaffoldError> {
    let base_dir = std::env::current_dir()?;
    let prompter = TerminalPrompter::new();
    let session = Session::new(&prompter, &SystemRunner, &PathProbe, config, &base_dir);
    session.run()?;
    Ok(())
}
