// Localized application navbar (components/app_navbar.rs)
pub mod app_navbar;
pub use app_navbar::register_nav;
pub use app_navbar::AppNavbar;
pub use app_navbar::NavBuilder;

mod folding_table;
pub use folding_table::{Column, FoldedColumn, FoldingTable, TableLayout, TableRow};

mod share_modal;
pub use share_modal::{share_link, ShareRecordModal};
