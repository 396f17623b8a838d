mod expand;
mod headings;

pub use expand::ExpandCSpace;
pub use headings::ExpandAllHeadings;
