pub mod lyrics;
pub mod pronunciation;
pub mod utility;
