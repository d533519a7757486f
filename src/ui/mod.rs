pub mod chart;
pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use chart::rating_chart;
pub use icons::Icons;
pub use output::{error, header, info, success, warn};
pub use table::employee_table;
pub use theme::{Theme, theme};
