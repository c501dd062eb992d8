//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! autoscreenwriter binary.

mod commands;
mod story;
mod vision;

pub use commands::{Cli, Commands, StoryArgs};
pub use story::{handle_prompt_command, handle_story_command};
pub use vision::handle_vision_command;
