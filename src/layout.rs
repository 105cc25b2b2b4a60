//! Fixed table of V4L2 structures and their sizes for the build target.
//!
//! Sizes come from the bindgen output of `linux/videodev2.h` that the `v4l`
//! crate re-exports, so they reflect the target's C layout.

use std::fmt;
use std::mem::size_of;

use v4l::v4l_sys as sys;

/// A probed kernel structure: its C name and size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructSize {
    /// C structure name, e.g. `v4l2_capability`.
    pub name: &'static str,
    /// Size in bytes on the build target.
    pub size: usize,
}

impl fmt::Display for StructSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.name, self.size)
    }
}

macro_rules! probe {
    ($ty:ident) => {
        StructSize {
            name: stringify!($ty),
            size: size_of::<sys::$ty>(),
        }
    };
}

/// Number of structures in the report.
pub const STRUCT_COUNT: usize = 18;

/// Probed structures in report order.
const STRUCT_SIZES: [StructSize; STRUCT_COUNT] = [
    probe!(v4l2_buffer),
    probe!(v4l2_capability),
    probe!(v4l2_create_buffers),
    probe!(v4l2_decoder_cmd),
    probe!(v4l2_event),
    probe!(v4l2_event_subscription),
    probe!(v4l2_exportbuffer),
    probe!(v4l2_frmsizeenum),
    probe!(v4l2_frmsize_stepwise),
    probe!(v4l2_fmtdesc),
    probe!(v4l2_pix_format),
    probe!(v4l2_plane_pix_format),
    probe!(v4l2_pix_format_mplane),
    probe!(v4l2_plane),
    probe!(v4l2_requestbuffers),
    probe!(v4l2_selection),
    probe!(v4l2_format),
    probe!(v4l2_timecode),
];

/// All probed structures, in report order.
#[must_use]
pub const fn struct_sizes() -> &'static [StructSize] {
    &STRUCT_SIZES
}

/// Look up a probed structure by its C name.
#[must_use]
pub fn find(name: &str) -> Option<StructSize> {
    STRUCT_SIZES.iter().find(|entry| entry.name == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_eighteen_entries() {
        assert_eq!(struct_sizes().len(), 18);
        assert_eq!(struct_sizes().len(), STRUCT_COUNT);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = struct_sizes().iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), STRUCT_COUNT);
    }

    #[test]
    fn test_sizes_are_positive() {
        for entry in struct_sizes() {
            assert!(entry.size > 0, "{} has zero size", entry.name);
        }
    }

    #[test]
    fn test_report_order() {
        let names: Vec<_> = struct_sizes().iter().map(|entry| entry.name).collect();
        assert_eq!(names.first().copied(), Some("v4l2_buffer"));
        assert_eq!(names.get(1).copied(), Some("v4l2_capability"));
        assert_eq!(names.last().copied(), Some("v4l2_timecode"));
    }

    #[test]
    fn test_find_capability() {
        let caps = find("v4l2_capability").expect("capability not in table");
        assert_eq!(caps.size, 104);
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("v4l2_window").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_display_is_tab_separated() {
        let entry = StructSize {
            name: "v4l2_timecode",
            size: 16,
        };
        assert_eq!(entry.to_string(), "v4l2_timecode\t16");
    }

    #[test]
    fn test_format_holds_multiplanar_format() {
        let format = find("v4l2_format").expect("format not in table");
        let mplane = find("v4l2_pix_format_mplane").expect("mplane not in table");
        assert!(format.size > mplane.size);
    }
}
