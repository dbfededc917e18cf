pub mod block_segmenter;
pub mod domain_aggregator;
pub mod event_filter;
pub mod sub_block_detector;

pub use block_segmenter::{BlockSegmenter, Segmentation};
pub use domain_aggregator::{DomainAggregator, DomainRanking};
pub use event_filter::{EventFilter, FilterOutcome, FilterStats};
pub use sub_block_detector::{minute_bins, SubBlockDetector};
