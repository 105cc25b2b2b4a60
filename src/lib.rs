//! V4L2 layout probe: byte sizes of kernel video-capture structures.
//!
//! The sizes are read from the raw `videodev2.h` bindings that the `v4l` crate
//! exposes, and are reported as `<name>\t<size>` lines so interop code can be
//! checked against the layout of the build target.

pub mod error;
pub mod layout;
pub mod report;

pub use error::{ProbeError, Result};
pub use layout::{find, struct_sizes, StructSize, STRUCT_COUNT};
pub use report::{render_report, write_report};
