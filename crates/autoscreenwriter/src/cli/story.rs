//! Story and prompt command handlers.

use super::StoryArgs;
use autoscreenwriter::{
    AutoscreenwriterResult, ModelRegistry, StoryPipeline, StoryPremise, StoryRequest,
    ValidationError, build_prompt,
};
use std::io::Write;

/// Writes fragments as they arrive, space-separated.
///
/// The first write error is logged and kept; later fragments are skipped.
struct FragmentWriter<W> {
    out: W,
    written: usize,
    error: Option<std::io::Error>,
}

impl<W: Write> FragmentWriter<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    fn write(&mut self, fragment: &str) {
        if self.error.is_some() {
            return;
        }
        let separator = if self.written == 0 { "" } else { " " };
        let result = write!(self.out, "{}{}", separator, fragment).and_then(|_| self.out.flush());
        match result {
            Ok(()) => self.written += 1,
            Err(e) => {
                tracing::warn!(error = %e, "Stopped writing story to stdout");
                self.error = Some(e);
            }
        }
    }
}

/// Plain-text aggregation of unreadable chunks leaves only separators.
fn is_blank(story: &str) -> bool {
    story.trim().is_empty()
}

impl StoryArgs {
    /// Build the story request these arguments describe.
    pub fn to_request(&self) -> AutoscreenwriterResult<StoryRequest> {
        let premise = StoryPremise::new(self.premise.iter().cloned())?;
        let request = StoryRequest::builder()
            .character_name(self.name.as_str())
            .character_type(self.character_type.as_str())
            .character_persona(self.persona.as_str())
            .character_location(self.location.as_str())
            .story_premise(premise)
            .length(self.length)
            .creativity(self.creativity)
            .build()
            .map_err(ValidationError::from)?;
        Ok(request)
    }
}

/// Handles the prompt command.
#[tracing::instrument(skip_all)]
pub fn handle_prompt_command(args: &StoryArgs) -> AutoscreenwriterResult<()> {
    let request = args.to_request()?;
    let (prompt, config) = build_prompt(&request);

    println!("{}", prompt);
    println!(
        "temperature: {}\nmax_output_tokens: {}",
        config.temperature(),
        config.max_output_tokens()
    );
    Ok(())
}

/// Handles the story command.
#[tracing::instrument(skip(registry, args))]
pub async fn handle_story_command(
    registry: &ModelRegistry,
    args: &StoryArgs,
    show_prompt: bool,
    progressive: bool,
    allow_empty: bool,
) -> AutoscreenwriterResult<()> {
    let request = args.to_request()?;
    let mut pipeline = StoryPipeline::new(registry);
    if allow_empty {
        pipeline = pipeline.permissive();
    }

    eprintln!("Generating your story using {} ...", registry.text().model_name());

    let outcome = if progressive {
        let mut writer = FragmentWriter::new(std::io::stdout().lock());
        let outcome = pipeline
            .generate_with(&request, |fragment| writer.write(fragment))
            .await?;
        if writer.error.is_none() {
            println!();
        }
        outcome
    } else {
        let outcome = pipeline.generate(&request).await?;
        if !is_blank(outcome.story().text()) {
            println!("Your story:\n");
            println!("{}", outcome.story());
        }
        outcome
    };

    if is_blank(outcome.story().text()) {
        tracing::warn!("Model returned no text");
        eprintln!("The model returned no text.");
    }

    if show_prompt {
        println!("\n--- Prompt ---\n");
        println!("{}", outcome.prompt());
    }
    Ok(())
}
