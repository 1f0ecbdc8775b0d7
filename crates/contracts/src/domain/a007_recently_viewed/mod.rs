pub mod aggregate;

pub use aggregate::{
    RecentlyViewedAction, RecentlyViewedItem, RecentlyViewedState, MAX_RECENTLY_VIEWED,
};
