#[macro_use]
mod macros;

pub mod density;
pub mod energy;
pub mod length;
pub mod power;
pub mod power_density;
pub mod speed;
pub mod time;
