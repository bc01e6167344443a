mod food;
pub use food::*;

mod food_log;
pub use food_log::*;

mod user;
pub use user::*;

mod weight;
pub use weight::*;
