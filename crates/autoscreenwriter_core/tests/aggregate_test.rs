use autoscreenwriter_core::{AggregationPolicy, ResponseChunk, aggregate, aggregate_with};
use autoscreenwriter_error::{StreamError, StreamErrorKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

type Item = Result<ResponseChunk, StreamError>;

fn hello_fail_world() -> Vec<Item> {
    vec![
        Ok(ResponseChunk::from_text("Hello")),
        Ok(ResponseChunk::blocked("SAFETY")),
        Ok(ResponseChunk::from_text("world")),
    ]
}

#[tokio::test]
async fn test_plain_text_keeps_placeholder() {
    let response = aggregate(tokio_stream::iter(hello_fail_world()), AggregationPolicy::PlainText)
        .await
        .expect("Stream succeeds");

    assert_eq!(response.text(), "Hello  world");
    assert_eq!(*response.chunks(), 3);
    assert_eq!(*response.failed_chunks(), 1);
}

#[tokio::test]
async fn test_vision_skips_failed_chunk() {
    let response = aggregate(tokio_stream::iter(hello_fail_world()), AggregationPolicy::Vision)
        .await
        .expect("Stream succeeds");

    assert_eq!(response.text(), "Helloworld");
}

#[tokio::test]
async fn test_empty_stream_yields_empty_text() {
    for policy in [AggregationPolicy::PlainText, AggregationPolicy::Vision] {
        let response = aggregate(tokio_stream::iter(Vec::<Item>::new()), policy)
            .await
            .unwrap();
        assert_eq!(response.text(), "");
        assert_eq!(*response.chunks(), 0);
    }
}

#[tokio::test]
async fn test_all_chunks_failing_under_plain_text() {
    let chunks: Vec<Item> = vec![
        Ok(ResponseChunk::blocked("SAFETY")),
        Ok(ResponseChunk::default()),
    ];
    let response = aggregate(tokio_stream::iter(chunks), AggregationPolicy::PlainText)
        .await
        .unwrap();

    assert_eq!(response.text(), " ");
}

#[tokio::test]
async fn test_stream_error_discards_partial_text() {
    let chunks: Vec<Item> = vec![
        Ok(ResponseChunk::from_text("Hello")),
        Ok(ResponseChunk::from_text("there")),
        Err(StreamError::new(StreamErrorKind::Transport("connection reset".into()))),
    ];

    let err = aggregate(tokio_stream::iter(chunks), AggregationPolicy::PlainText)
        .await
        .unwrap_err();

    assert_eq!(
        err.kind(),
        &StreamErrorKind::Transport("connection reset".into())
    );
}

#[tokio::test]
async fn test_stream_error_stops_consumption() {
    let polled = Arc::new(AtomicUsize::new(0));
    let counter = polled.clone();
    let stream = async_stream::stream! {
        counter.fetch_add(1, Ordering::SeqCst);
        yield Ok(ResponseChunk::from_text("one"));
        counter.fetch_add(1, Ordering::SeqCst);
        yield Err(StreamError::new(StreamErrorKind::Server("quota".into())));
        counter.fetch_add(1, Ordering::SeqCst);
        yield Ok(ResponseChunk::from_text("three"));
    };

    let result = aggregate(stream, AggregationPolicy::Vision).await;

    assert!(result.is_err());
    assert_eq!(polled.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_fragments_are_reported_as_they_arrive() {
    let mut seen = Vec::new();
    let response = aggregate_with(
        tokio_stream::iter(hello_fail_world()),
        AggregationPolicy::PlainText,
        |fragment| seen.push(fragment.to_string()),
    )
    .await
    .unwrap();

    assert_eq!(seen, ["Hello", "", "world"]);
    assert_eq!(response.text(), &seen.join(" "));
}

#[tokio::test]
async fn test_vision_fragments_skip_failures() {
    let mut seen = Vec::new();
    aggregate_with(
        tokio_stream::iter(hello_fail_world()),
        AggregationPolicy::Vision,
        |fragment| seen.push(fragment.to_string()),
    )
    .await
    .unwrap();

    assert_eq!(seen, ["Hello", "world"]);
}
