pub mod about;
pub mod contacts;
pub mod delivery;

pub use about::AboutPage;
pub use contacts::ContactsPage;
pub use delivery::DeliveryPage;
