//#![deny(warnings)]

#![allow(clippy::bool_assert_comparison)]
#![allow(clippy::bool_comparison)]
#![allow(clippy::needless_range_loop)]

pub mod collision;
pub mod config;
pub mod conversion;
pub mod display_list;
pub mod geometry;
pub mod material;
pub mod scene;
pub mod utils;

pub use crate::config::settings::{ConversionSettings, ExportFormat, FogSettings};
pub use crate::conversion::pipeline::{ConversionError, ConversionReport, ConversionTargets, convert_collision, convert_display_lists, convert_file};
pub use crate::scene::obj_import::{import_obj, parse_obj_scene};
