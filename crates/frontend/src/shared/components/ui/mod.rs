pub mod checkbox;
pub mod input;
pub mod radio;
pub mod select;

pub use checkbox::CheckboxList;
pub use input::Input;
pub use radio::RadioGroup;
pub use select::Select;
