mod directions;
mod duration;

pub use self::directions::normalize;
pub use self::duration::parse_duration;
