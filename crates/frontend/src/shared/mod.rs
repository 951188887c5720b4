pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod embedded;
pub mod format;
pub mod masks;
pub mod modal_frame;
pub mod modal_stack;
