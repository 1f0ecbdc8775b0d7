pub mod order_form;
pub mod page;

pub use order_form::OrderFormPanel;
pub use page::CartPage;
