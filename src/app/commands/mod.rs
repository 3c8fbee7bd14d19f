pub mod execution_name;
pub mod initialize;
pub mod launch;
pub mod params;
pub mod preview;
