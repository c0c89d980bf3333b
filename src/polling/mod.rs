//! # Per-tag scheduling and change detection.
//!
//! - [`Cadence`]: a tag's validated due-cycle divisor.
//! - [`SamplePlan`]: the ordered set of scheduled tags for one data source,
//!   answering "which tags are due this cycle".
//! - [`ValueCache`]: last-seen values per tag, answering "did this reading
//!   change".
//!
//! All three are pure bookkeeping: sample steps consult them every cycle,
//! the scheduler never touches them.

mod cadence;
mod change;
mod plan;

pub use cadence::Cadence;
pub use change::ValueCache;
pub use plan::{SamplePlan, ScheduledTag};
