//! # Sampling capability.
//!
//! This module defines the [`Sampler`] trait — the single operation the
//! scheduler invokes every cycle — and a function-backed implementation
//! [`SamplerFn`] for small steps and tests.
//!
//! A sample step typically consults a
//! [`SamplePlan`](crate::polling::SamplePlan) for the tags due this cycle,
//! acquires readings from the device, asks the
//! [`ValueCache`](crate::polling::ValueCache) which readings changed, and
//! hands changed values to the reporting side. All of that is the step's
//! business; the scheduler only cares that the call returns.
//!
//! The step receives a [`CancellationToken`] and should check it at natural
//! pause points when it runs its own internal loop (the
//! `interval = None` mode).

use std::borrow::Cow;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::SampleError;

/// # One cycle's worth of acquisition work.
///
/// The scheduler holds this capability by reference; any type that can
/// sample is welcome, no subtype relationships required.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use pollvisor::{SampleError, Sampler};
///
/// struct Demo;
///
/// #[async_trait]
/// impl Sampler for Demo {
///     fn name(&self) -> &str { "demo" }
///
///     async fn sample(&mut self, cycle: u64, _ctx: CancellationToken) -> Result<(), SampleError> {
///         let _ = cycle;
///         // read due tags, detect changes, report...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Sampler: Send {
    /// Returns a stable, human-readable name (usually the protocol name).
    fn name(&self) -> &str;

    /// Performs the sample step for `cycle`.
    ///
    /// Steps that loop internally should poll `ctx.is_cancelled()` and exit
    /// promptly during shutdown. A returned error is logged and published;
    /// it does not stop the scheduler.
    async fn sample(&mut self, cycle: u64, ctx: CancellationToken) -> Result<(), SampleError>;
}

/// Function-backed sampler.
///
/// Wraps a closure that creates a new future per invocation; state shared
/// across cycles goes inside the closure's captures.
pub struct SamplerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SamplerFn<F> {
    /// Creates a new function-backed sampler.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

#[async_trait]
impl<F, Fut> Sampler for SamplerFn<F>
where
    F: FnMut(u64, CancellationToken) -> Fut + Send,
    Fut: std::future::Future<Output = Result<(), SampleError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn sample(&mut self, cycle: u64, ctx: CancellationToken) -> Result<(), SampleError> {
        (self.f)(cycle, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sampler_fn_passes_cycle_through() {
        let mut seen = Vec::new();
        {
            let mut s = SamplerFn::new("probe", |cycle, _ctx| {
                seen.push(cycle);
                async { Ok::<_, SampleError>(()) }
            });
            s.sample(1, CancellationToken::new()).await.unwrap();
            s.sample(2, CancellationToken::new()).await.unwrap();
        }
        assert_eq!(seen, [1, 2]);
    }
}
