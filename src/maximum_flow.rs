pub mod capacity_scaling;
pub mod flow_assignment;
pub mod residual;
