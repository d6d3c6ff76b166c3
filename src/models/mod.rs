//! CPU scheduling domain models.
//!
//! Provides the input, working and output types shared by every
//! simulator.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Immutable caller input |
//! | `ProcessRecord` | Per-run working copy with derived timings |
//! | `ExecutionInterval` | Gantt segment |
//! | `SchedulingResult` | Immutable run output |

mod algorithm;
mod interval;
mod process;
mod result;

pub use algorithm::Algorithm;
pub use interval::ExecutionInterval;
pub(crate) use interval::push_coalesced;
pub use process::{ProcessRecord, ProcessSpec, ProcessStatus};
pub use result::SchedulingResult;
