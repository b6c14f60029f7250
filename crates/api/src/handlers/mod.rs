pub mod genre;
pub mod track;
