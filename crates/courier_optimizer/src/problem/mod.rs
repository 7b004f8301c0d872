pub mod delivery;
pub mod location;
pub mod routing_problem;
pub mod time_window;
pub mod travel_matrix;
pub mod units;
pub mod vehicle;
