pub mod course;
pub mod reconciler;

pub use course::CourseService;
