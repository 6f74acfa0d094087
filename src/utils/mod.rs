pub mod browser;
pub mod environment;
pub mod paths;
pub mod terminal;

pub use browser::{open_in_browser, server_url};
pub use environment::{claude_dir_in, home_dir, output_dir_in};
pub use paths::{decode_project_dir, encode_url_segment, file_url, format_path_with_tilde, shorten_path};
pub use terminal::sanitize_line;
