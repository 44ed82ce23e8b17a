mod plan;

pub use plan::PlanFile;
