pub mod add_room_steps;
pub mod homepage_steps;
pub mod rooms_steps;
pub mod world;
