pub mod cursor;
pub mod date;
pub mod grid;
pub mod popover;
pub mod positioning;
pub mod range;
pub mod single;
pub mod stay;

pub use cursor::CalendarCursor;
pub use date::{format_iso_date, parse_iso_date, today, DateParseError};
pub use grid::{month_grid, DayCell, DayMark, GridCell};
pub use popover::PopoverGroup;
pub use positioning::{decide_placement, Placement, PlacementPolicy, TriggerRect};
pub use range::{RangeDatePicker, RangePickerOptions, RangeSelection};
pub use single::{PickerState, SingleDatePicker};
pub use stay::{StayDates, StayField};
