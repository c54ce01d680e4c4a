use std::sync::Arc;

use gather_core::{
    AggregateReport, DataSource, FetchStrategy, GatherConfig, GatherError, UserContent, UserId,
};

use crate::router::{content, parallel, recover, sequential};

/// Orchestrator that runs the fetch stages against one data source.
pub struct Gatherer {
    pub(crate) source: Arc<dyn DataSource>,
    pub(crate) cfg: GatherConfig,
}

/// Builder for constructing a `Gatherer` with custom configuration.
pub struct GathererBuilder {
    source: Option<Arc<dyn DataSource>>,
    cfg: GatherConfig,
}

impl Default for GathererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GathererBuilder {
    /// Create a new builder with no source and the default (parallel) strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: GatherConfig::default(),
        }
    }

    /// Set the data source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn DataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Select the strategy used by [`Gatherer::fetch`].
    ///
    /// Behavior and trade-offs:
    /// - `Sequential`: one call in flight at a time; latency is the sum of all calls.
    /// - `Parallel`: overlaps independent calls; latency is bounded by the slowest
    ///   call of each phase.
    #[must_use]
    pub const fn strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.strategy = strategy;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: GatherConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Gatherer`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been set via [`with_source`](Self::with_source).
    pub fn build(self) -> Result<Gatherer, GatherError> {
        let source = self.source.ok_or_else(|| {
            GatherError::InvalidArg(
                "no data source registered; add one via with_source(...)".to_string(),
            )
        })?;
        Ok(Gatherer {
            source,
            cfg: self.cfg,
        })
    }
}

impl Gatherer {
    /// Start building a new `Gatherer`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use gather::{FetchStrategy, Gatherer, UserId};
    /// use gather_mock::SimulatedSource;
    ///
    /// let gatherer = Gatherer::builder()
    ///     .with_source(Arc::new(SimulatedSource::default()))
    ///     .strategy(FetchStrategy::Parallel)
    ///     .build()?;
    /// let report = gatherer.fetch(&UserId::new("u1")?).await;
    /// ```
    #[must_use]
    pub fn builder() -> GathererBuilder {
        GathererBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GatherConfig {
        &self.cfg
    }

    /// The configured data source.
    #[must_use]
    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    /// Aggregate `user`'s data with the configured strategy.
    pub async fn fetch(&self, user: &UserId) -> AggregateReport {
        match self.cfg.strategy {
            FetchStrategy::Sequential => self.fetch_sequential(user).await,
            // Parallel, and the fallback for strategies added later
            _ => self.fetch_parallel(user).await,
        }
    }

    /// Aggregate with every call strictly in sequence.
    pub async fn fetch_sequential(&self, user: &UserId) -> AggregateReport {
        sequential::fetch_sequential(self.source(), user).await
    }

    /// Aggregate with overlapping stages and partial-failure tolerance.
    pub async fn fetch_parallel(&self, user: &UserId) -> AggregateReport {
        parallel::fetch_parallel(self.source(), user).await
    }

    /// Parallel aggregation that turns an escaping panic into a fatal report.
    pub async fn fetch_with_error_handling(&self, user: &UserId) -> AggregateReport {
        recover::fetch_with_error_handling(self.source(), user).await
    }

    /// Fetch all of `user`'s content, failing on the first error.
    ///
    /// # Errors
    /// Returns the first error raised by any stage.
    pub async fn user_content(&self, user: &UserId) -> Result<UserContent, GatherError> {
        content::user_content(self.source(), user).await
    }
}
