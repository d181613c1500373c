pub mod detail_panel;
pub mod error;
pub mod filter_panel;
pub mod list_panel;
pub mod map_panel;

pub use detail_panel::detail_panel;
pub use error::error_page;
pub use filter_panel::filter_panel;
pub use list_panel::list_panel;
pub use map_panel::map_panel;
