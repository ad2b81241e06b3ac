pub mod formatter;

pub use formatter::{
    format_impact, format_json, format_range, format_result, format_summary, should_use_colors,
};
