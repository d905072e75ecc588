mod courses;
mod home;

pub use courses::Courses;
pub use home::Home;
