pub mod capture;
pub mod movement;
