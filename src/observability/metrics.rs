use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry};
use tracing::info;
use std::sync::Arc;
use tokio::sync::OnceCell;


// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE.get_or_init(|| async {
        info!("Initializing Metrics ...");
        Metrics::new()}
    ).await
}


#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // CMS metrics
    pub cms_requests: IntCounterVec,
    pub token_refreshes: IntCounterVec,

    // Cache metrics
    pub cache_hits: IntCounterVec,
    pub cache_misses: IntCounterVec,
    pub cached_entries: IntGaugeVec,

    // Page metrics
    pub page_requests: IntCounterVec,
    pub page_assembly_duration: HistogramVec,

    // Config/runtime
    pub parse_failures: IntCounter,
    pub config_validation_errors: IntCounter,
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("contentagent".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // CMS
            cms_requests: IntCounterVec::new(Opts::new("cms_requests_total", "CMS api requests by kind and status"),&["kind", "status"],).unwrap(),
            token_refreshes: IntCounterVec::new(Opts::new("token_refreshes_total", "Token exchanges by outcome"),&["outcome"],).unwrap(),

            // Cache
            cache_hits: IntCounterVec::new(Opts::new("cache_hits_total", "Cache hits per cache"),&["cache"],).unwrap(),
            cache_misses: IntCounterVec::new(Opts::new("cache_misses_total", "Cache misses per cache"),&["cache"],).unwrap(),
            cached_entries: IntGaugeVec::new(Opts::new("cached_entries", "Entries held per cache"),&["cache"],).unwrap(),

            // Page
            page_requests: IntCounterVec::new(Opts::new("page_requests_total", "Page content requests by outcome"),&["page", "outcome"],).unwrap(),
            page_assembly_duration: HistogramVec::new(HistogramOpts::new("page_assembly_duration_seconds", "Page assembly duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),&["page"],).unwrap(),

            // Config/runtime
            parse_failures: IntCounter::new("config_parse_failures_total","Config parse failures",).unwrap(),
            config_validation_errors: IntCounter::new("config_validation_errors_total","Validation errors during startup",).unwrap(),
            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.cms_requests.clone())).unwrap();
        reg.register(Box::new(metrics.token_refreshes.clone())).unwrap();
        reg.register(Box::new(metrics.cache_hits.clone())).unwrap();
        reg.register(Box::new(metrics.cache_misses.clone())).unwrap();
        reg.register(Box::new(metrics.cached_entries.clone())).unwrap();
        reg.register(Box::new(metrics.page_requests.clone())).unwrap();
        reg.register(Box::new(metrics.page_assembly_duration.clone())).unwrap();
        reg.register(Box::new(metrics.parse_failures.clone())).unwrap();
        reg.register(Box::new(metrics.config_validation_errors.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
