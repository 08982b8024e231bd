//! # ncchecknodefile - integrity checks for NerveCenter node files
//!
//! A NerveCenter node file lists the nodes under monitoring, one
//! `begin node` / `end node` block per node:
//!
//! ```text
//! begin node
//!   id 339
//!   name moose
//!   address 192.168.1.1
//!   ...
//! end node
//! ```
//!
//! This library reads such a file in a single pass and reports:
//!
//! - nodes sharing an id (error). Node files written before NerveCenter v8
//!   have no ids at all; once any node has one, nodes without one are warned
//!   about.
//! - nodes sharing a name (error)
//! - nodes sharing an IP address (warning, this may well be intended)
//!
//! The file is only ever read.
//!
//! ## Modules
//!
//! - `scanner`: classifies each line of a node file
//! - `registry`: first-writer-wins tables used for duplicate detection
//! - `validator`: the record state machine and its diagnostics
//! - `report`: console text and JSON presentation
//! - `config`: run options passed from the command line
//! - `error`: fatal errors (the file cannot be opened or read)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ncchecknodefile::{config::CheckConfig, report, validator};
//!
//! let config = CheckConfig::new("/opt/OSInc/db/nervecenter.node");
//! let result = validator::check_file(&config)?;
//!
//! report::write_text(&result, &mut std::io::stdout())?;
//! std::process::exit(result.outcome().exit_code().into());
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Content problems never abort a check; they become diagnostics in the
//! returned [`validator::Report`]. Only a file that cannot be opened or read
//! produces an [`error::CheckError`], in which case no diagnostics are
//! returned at all.

pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod validator;

pub use config::{CheckConfig, OutputFormat, DEFAULT_NODE_FILE};
pub use error::CheckError;
pub use validator::{check_file, check_reader, check_str, Outcome, Report, Summary};
