mod parser;
mod quantity;
mod scale;
mod units;

pub use parser::{parse, parse_all};
pub use quantity::take_quantity;
pub use scale::rescale;
pub use units::normalize_unit;
