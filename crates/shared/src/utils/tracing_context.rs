use tokio::time::Instant;
use tracing::Span;

/// An in-flight service operation: the span it runs under and when it began.
pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
