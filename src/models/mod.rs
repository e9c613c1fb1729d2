pub mod blocked_date;
pub mod booking;
pub mod day_type;
pub mod holiday;
pub mod settings;
pub mod time_rule;

pub use blocked_date::*;
pub use booking::*;
pub use day_type::*;
pub use holiday::*;
pub use settings::*;
pub use time_rule::*;
