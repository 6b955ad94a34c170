pub mod auth_guard;
pub mod calendar_month;
pub mod city_dropdown;
pub mod date_picker;
pub mod guests_picker;
pub mod popover;
pub mod range_picker;
pub mod status;

// Re-export commonly used types
pub use auth_guard::AdminAuthGuard;
pub use city_dropdown::CityDropdown;
pub use date_picker::{DatePicker, PickerEvent};
pub use guests_picker::GuestsPicker;
pub use popover::Popover;
pub use range_picker::StayRangePicker;
pub use status::{ErrorView, LoadingView, Notice};
