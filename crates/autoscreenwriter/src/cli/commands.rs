//! Command-line definitions.

use autoscreenwriter_core::{Creativity, LogFormat, PREMISE_OPTIONS, StoryLength};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Write a chaptered story with Gemini on Vertex AI.
#[derive(Parser, Debug)]
#[command(name = "autoscreenwriter")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long, global = true, env = "AUTOSCREENWRITER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format (pretty or json)
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a story
    Story {
        #[command(flatten)]
        story: StoryArgs,

        /// Also print the prompt that was sent
        #[arg(long)]
        show_prompt: bool,

        /// Print text as it streams in
        #[arg(long)]
        progressive: bool,

        /// Send the prompt even if character fields are empty
        #[arg(long)]
        allow_empty: bool,
    },

    /// Print the prompt and generation settings without calling the model
    Prompt {
        #[command(flatten)]
        story: StoryArgs,
    },

    /// Ask the vision model about images
    Vision {
        /// Question or instruction
        #[arg(long)]
        prompt: String,

        /// Local image file to send inline (repeatable)
        #[arg(long = "image")]
        images: Vec<PathBuf>,

        /// Stored image URI such as gs://bucket/cat.jpg (repeatable)
        #[arg(long = "file-uri")]
        file_uris: Vec<String>,
    },
}

/// Story inputs, defaulting to the preset character.
#[derive(Args, Debug, Clone)]
pub struct StoryArgs {
    /// Character name
    #[arg(long, default_value = "Mittens")]
    pub name: String,

    /// What type of character it is
    #[arg(long = "type", default_value = "Cat")]
    pub character_type: String,

    /// Character personality
    #[arg(long, default_value = "Mitten is a very friendly cat.")]
    pub persona: String,

    /// Where the character lives
    #[arg(long, default_value = "Andromeda Galaxy")]
    pub location: String,

    /// Story premise tags, in order (repeatable or comma-separated)
    #[arg(
        long = "premise",
        value_delimiter = ',',
        default_values = ["Love", "Adventure"],
        value_parser = PossibleValuesParser::new(PREMISE_OPTIONS),
    )]
    pub premise: Vec<String>,

    /// Creativity level (low or high)
    #[arg(long)]
    pub creativity: Creativity,

    /// Story length (short or long)
    #[arg(long)]
    pub length: StoryLength,
}
