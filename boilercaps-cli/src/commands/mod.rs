//! Building blocks of the `boilercaps` run.
//!
//! The binary has a single entry point, [`new_project::run`]; the other
//! submodules are the pieces it is assembled from.

/// Project types and the optional dependencies offered for each.
pub mod catalog;

/// Generator invocation and the per-dependency install loop.
///
/// Installs run one at a time, in selection order; a dependency's
/// post-install template is written as soon as its install succeeds.
pub mod install;

/// Project scaffolding — the interactive run.
///
/// Collects every answer first, then guards tools, generates, installs
/// and writes templates.
pub mod new_project;

/// Interactive questions behind the [`prompt::Prompter`] trait.
pub mod prompt;

/// Static files written into generated projects.
pub mod templates;

/// Tool lookup on `PATH`, the install-or-abort guard, and child processes.
pub mod toolchain;

/// Banner and status lines printed to the terminal.
pub mod ui;
