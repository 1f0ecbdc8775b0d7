pub mod page_header;
pub mod ui;

pub use page_header::PageHeader;
