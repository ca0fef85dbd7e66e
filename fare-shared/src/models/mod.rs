pub mod flights;
pub mod trip;
