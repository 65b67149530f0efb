mod ant;
mod colony;

pub use ant::Ant;
pub use colony::Colony;
