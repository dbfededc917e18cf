use querylens_application::ports::QueryLogSource;
use querylens_application::use_cases::{GetActivityReportUseCase, GetTopDomainsUseCase};
use querylens_domain::{Config, HostnameClassifier};
use querylens_infrastructure::JsonLinesQueryLog;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub get_activity: Arc<GetActivityReportUseCase>,
    pub get_top_domains: Arc<GetTopDomainsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, log_path: &Path) -> anyhow::Result<Self> {
        let source: Arc<dyn QueryLogSource> = Arc::new(JsonLinesQueryLog::new(log_path));
        let patterns = config.filter.background_patterns()?;
        debug!(patterns = patterns.len(), "Background patterns loaded");
        let classifier = Arc::new(HostnameClassifier::new(patterns));

        Ok(Self {
            get_activity: Arc::new(GetActivityReportUseCase::new(
                source.clone(),
                classifier.clone(),
            )),
            get_top_domains: Arc::new(GetTopDomainsUseCase::new(source, classifier)),
        })
    }
}
