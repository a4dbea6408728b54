//! # boilercaps-cli
//!
//! Interactive command-line tool that scaffolds JavaScript projects by
//! driving existing generators (`create-react-app`, `express`, ...) and the
//! package manager.
//!
//! A run asks for a category (frontend, backend, or both), a project name,
//! a project type and a set of optional dependencies, then:
//!
//! | Step | What happens |
//! |------|--------------|
//! | Guard | the generator executable is located on `PATH`, or installed globally with consent |
//! | Generate | the generator is invoked with the project name |
//! | Install | `npm install <dep>` once per selected dependency |
//! | Emit | `.env`, `models/connection.js` or `vercel.json` where requested |
//!
//! ## Architecture
//!
//! - [`commands::new_project`] — the prompt sequence and the run itself
//! - [`commands::catalog`] — project types and their dependency tables
//! - [`commands::prompt`] — the [`Prompter`](commands::prompt::Prompter) seam over `dialoguer`
//! - [`commands::toolchain`] — tool probing, the availability guard, child processes
//! - [`commands::install`] — generator invocation and the dependency loop
//! - [`commands::templates`] — static files written into generated projects
//! - [`config`] — toolchain settings from the environment
//! - [`error`] — the crate-wide [`ScaffoldError`](error::ScaffoldError)

pub mod commands;
pub mod config;
pub mod error;
