//! HTML documents for sessions and the session index
//!
//! Pages are self-contained: styles and the index search script are inlined so
//! that generated files can be opened straight from disk.

pub mod index;
pub mod page;
pub mod session;
pub mod timestamps;
pub mod writer;

pub use index::{IndexLinks, render_index_page};
pub use session::{fragment_html, render_session_page};
pub use writer::{SiteReport, write_session_page, write_static_site};
