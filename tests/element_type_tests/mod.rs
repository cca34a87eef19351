pub mod test_utils;

pub mod allow_list;
pub mod components;
pub mod polymorphic_prop;
pub mod source;
