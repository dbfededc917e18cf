use querylens_application::services::BlockSegmenter;

mod helpers;
use helpers::{at, events_at};

#[test]
fn test_gap_splits_blocks() {
    let events = events_at(&["08:00:00", "08:02:00", "08:10:00"]);

    let result = BlockSegmenter::new(5, 1).segment(&events);

    assert_eq!(result.blocks.len(), 2);
    assert_eq!(result.blocks[0].start_time, at("08:00:00"));
    assert_eq!(result.blocks[0].end_time, at("08:02:00"));
    assert_eq!(result.blocks[0].query_count, 2);
    assert_eq!(result.blocks[1].start_time, at("08:10:00"));
    assert_eq!(result.blocks[1].end_time, at("08:10:00"));
    assert_eq!(result.blocks[1].query_count, 1);
    assert!(result.dropped.is_empty());
}

#[test]
fn test_min_queries_drops_thin_blocks() {
    let events = events_at(&["08:00:00", "08:02:00", "08:10:00"]);

    let result = BlockSegmenter::new(5, 2).segment(&events);

    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].query_count, 2);
    assert_eq!(result.dropped.len(), 1);
    assert_eq!(result.dropped[0].start_time, at("08:10:00"));
    assert_eq!(result.dropped_queries(), 1);
}

#[test]
fn test_exact_gap_starts_new_block() {
    let events = events_at(&["08:00:00", "08:05:00"]);

    let result = BlockSegmenter::new(5, 1).segment(&events);

    assert_eq!(result.blocks.len(), 2);
}

#[test]
fn test_just_under_gap_extends_block() {
    let events = events_at(&["08:00:00", "08:04:59"]);

    let result = BlockSegmenter::new(5, 1).segment(&events);

    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].query_count, 2);
}

#[test]
fn test_gap_is_measured_from_previous_event() {
    // a long block built from short steps stays one block
    let events = events_at(&["08:00:00", "08:04:00", "08:08:00", "08:12:00"]);

    let result = BlockSegmenter::new(5, 1).segment(&events);

    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].end_time, at("08:12:00"));
}

#[test]
fn test_zero_gap_isolates_every_event() {
    let events = events_at(&["08:00:00", "08:00:00", "08:00:01"]);

    let result = BlockSegmenter::new(0, 1).segment(&events);

    assert_eq!(result.blocks.len(), 3);
    assert!(result.blocks.iter().all(|b| b.query_count == 1));
}

#[test]
fn test_empty_input_yields_no_blocks() {
    let result = BlockSegmenter::new(5, 1).segment(&[]);

    assert!(result.blocks.is_empty());
    assert!(result.dropped.is_empty());
}

#[test]
fn test_single_event() {
    let events = events_at(&["12:00:00"]);

    let kept = BlockSegmenter::new(5, 1).segment(&events);
    let dropped = BlockSegmenter::new(5, 5).segment(&events);

    assert_eq!(kept.blocks.len(), 1);
    assert_eq!(kept.blocks[0].query_count, 1);
    assert_eq!(kept.blocks[0].start_time, kept.blocks[0].end_time);
    assert!(dropped.blocks.is_empty());
    assert_eq!(dropped.dropped.len(), 1);
}

#[test]
fn test_blocks_are_ordered_and_disjoint() {
    let events = events_at(&[
        "06:00:00", "06:01:30", "06:03:00", "07:00:00", "07:00:10", "07:20:00", "07:21:00",
        "07:22:00", "07:23:00", "07:24:00", "09:00:00",
    ]);

    let result = BlockSegmenter::new(5, 2).segment(&events);

    for block in &result.blocks {
        assert!(block.query_count >= 2);
        assert!(block.start_time <= block.end_time);
        assert_eq!(block.timestamps.len(), block.query_count);
    }
    for pair in result.blocks.windows(2) {
        assert!(pair[0].end_time < pair[1].start_time);
    }
    let kept: usize = result.blocks.iter().map(|b| b.query_count).sum();
    assert_eq!(kept + result.dropped_queries(), events.len());
}

#[test]
fn test_display_duration_is_at_least_one_second() {
    let events = events_at(&["12:00:00"]);

    let result = BlockSegmenter::new(5, 1).segment(&events);

    assert_eq!(result.blocks[0].duration().num_seconds(), 0);
    assert_eq!(result.blocks[0].display_duration().num_seconds(), 1);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "sorted")]
fn test_unsorted_input_is_rejected() {
    let events = events_at(&["08:10:00", "08:00:00"]);

    BlockSegmenter::new(5, 1).segment(&events);
}
