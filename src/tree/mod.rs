mod exclusions;
mod listing;
mod options;
mod renderer;

pub use exclusions::{parse_name_list, Exclusions};
pub use listing::{DirLister, FsLister, Listing};
pub use options::{Branch, GlyphPolicy, RenderOptions, INDENT_UNIT};
pub use renderer::{RenderSummary, TreeRenderer};
