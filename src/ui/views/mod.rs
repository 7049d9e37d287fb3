pub mod course_select;
pub mod module_menu;
pub mod quiz;
pub mod section;
pub mod section_menu;
pub mod section_summary;
pub mod summary;
pub mod welcome;
