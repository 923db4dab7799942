pub mod display_name;

pub use display_name::resolve_display_name;
