pub mod cli;
pub mod ctx;
pub mod data;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod plot;
pub mod schema;
