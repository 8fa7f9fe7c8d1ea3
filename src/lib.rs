#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod feedback;
pub mod fixtures;
pub mod session;
pub mod tone;
pub mod ui;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{Result, VibeError};
