pub mod catalog;
pub mod course_viewer;
pub mod courses_table;
pub mod dialogs;
pub mod player;
