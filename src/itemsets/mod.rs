pub mod count;
pub mod load;
