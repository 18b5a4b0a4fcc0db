pub mod html;
pub mod io;
pub mod page;
pub mod parsing;
pub mod site;


// Re-export key types for easier usage
pub use html::{Attributes, HtmlError, HtmlNode};
pub use page::{BuildReport, PageError, PageOptions};
pub use parsing::{
    MarkdownError, ParseOptions,
    blocks::{Block, BlockKind, QuoteStyle},
    inline::{InlineSpan, parse_inline},
    markdown_to_html, parse_document, parse_document_with,
};
pub use site::{SiteError, SiteSettings, build_site};
