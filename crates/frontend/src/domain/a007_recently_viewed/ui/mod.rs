pub mod widget;

pub use widget::RecentlyViewedWidget;
