pub mod normalize;
pub mod readability;
pub mod route;
