use async_trait::async_trait;
use autoscreenwriter::{
    AutoscreenwriterErrorKind, ChunkStream, Creativity, GenerateContentRequest, GenerativeModel,
    ModelRegistry, ResponseChunk, StoryLength, StoryPipeline, StoryRequest, StreamError,
    StreamErrorKind, ValidationErrorKind, build_prompt,
};
use std::sync::{Arc, Mutex};

/// Mock model that replays a chunk script and counts calls.
struct ScriptedModel {
    name: &'static str,
    script: Vec<Result<ResponseChunk, StreamError>>,
    calls: Mutex<Vec<GenerateContentRequest>>,
}

impl ScriptedModel {
    fn new(name: &'static str, script: Vec<Result<ResponseChunk, StreamError>>) -> Arc<Self> {
        Arc::new(Self {
            name,
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().expect("Mock lock poisoned").len()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn stream_generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<ChunkStream, StreamError> {
        self.calls
            .lock()
            .expect("Mock lock poisoned")
            .push(request.clone());
        Ok(Box::pin(futures_util::stream::iter(self.script.clone())))
    }

    fn model_name(&self) -> &str {
        self.name
    }
}

fn registry(text: Arc<ScriptedModel>) -> ModelRegistry {
    ModelRegistry::new(text, ScriptedModel::new("vision", Vec::new()))
}

fn request() -> StoryRequest {
    StoryRequest::builder()
        .length(StoryLength::Short)
        .creativity(Creativity::High)
        .build()
        .expect("Valid story request")
}

#[tokio::test]
async fn test_story_outcome_carries_prompt_and_story() {
    let model = ScriptedModel::new(
        "text",
        vec![
            Ok(ResponseChunk::from_text("Chapter 1.")),
            Ok(ResponseChunk::blocked("SAFETY")),
            Ok(ResponseChunk::from_text("The End.")),
        ],
    );
    let registry = registry(model.clone());

    let outcome = StoryPipeline::new(&registry)
        .generate(&request())
        .await
        .expect("Generation succeeds");

    let (expected_prompt, expected_config) = build_prompt(&request());
    assert_eq!(outcome.prompt(), &expected_prompt);
    assert_eq!(outcome.config(), &expected_config);
    assert_eq!(outcome.story().text(), "Chapter 1.  The End.");
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_empty_field_rejected_before_calling_model() {
    let model = ScriptedModel::new("text", vec![Ok(ResponseChunk::from_text("unused"))]);
    let registry = registry(model.clone());
    let request = StoryRequest::builder()
        .character_location("   ")
        .length(StoryLength::Long)
        .creativity(Creativity::Low)
        .build()
        .unwrap();

    let err = StoryPipeline::new(&registry)
        .generate(&request)
        .await
        .unwrap_err();

    match err.kind() {
        AutoscreenwriterErrorKind::Validation(e) => {
            assert_eq!(e.kind(), &ValidationErrorKind::EmptyField("character_location"))
        }
        other => panic!("Expected validation error, got {other}"),
    }
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_permissive_pipeline_sends_empty_fields() {
    let model = ScriptedModel::new("text", vec![Ok(ResponseChunk::from_text("ok"))]);
    let registry = registry(model.clone());
    let request = StoryRequest::builder()
        .character_name("")
        .length(StoryLength::Short)
        .creativity(Creativity::Low)
        .build()
        .unwrap();

    let outcome = StoryPipeline::new(&registry)
        .permissive()
        .generate(&request)
        .await
        .expect("Permissive pipeline accepts empty fields");

    assert_eq!(outcome.story().text(), "ok");
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_stream_failure_returns_no_story() {
    let model = ScriptedModel::new(
        "text",
        vec![
            Ok(ResponseChunk::from_text("Chapter 1.")),
            Ok(ResponseChunk::from_text("Chapter 2.")),
            Err(StreamError::new(StreamErrorKind::Transport("broken pipe".into()))),
        ],
    );
    let registry = registry(model);

    let err = StoryPipeline::new(&registry)
        .generate(&request())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), AutoscreenwriterErrorKind::Stream(_)));
}

#[tokio::test]
async fn test_progressive_fragments_match_story() {
    let model = ScriptedModel::new(
        "text",
        vec![
            Ok(ResponseChunk::from_text("Once")),
            Ok(ResponseChunk::from_text("upon")),
        ],
    );
    let registry = registry(model);
    let mut fragments = Vec::new();

    let outcome = StoryPipeline::new(&registry)
        .generate_with(&request(), |f| fragments.push(f.to_owned()))
        .await
        .unwrap();

    assert_eq!(fragments.join(" "), *outcome.story().text());
}
