pub mod describe;
pub mod export;
pub mod gpx;
pub mod grades;
pub mod track;
