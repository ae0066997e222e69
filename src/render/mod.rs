//! Rendering module for converting structured letters to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;

pub(crate) use html::escape_html;
pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{PageStyle, RenderOptions};
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
