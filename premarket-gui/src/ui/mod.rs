pub mod main_content;
pub mod sidebar;
pub mod table;
pub mod top_nav;
