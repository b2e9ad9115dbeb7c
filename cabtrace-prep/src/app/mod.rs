mod operation;
mod prep_app;

pub use operation::PrepOperation;
pub use prep_app::PrepApp;
