// Domain layer - Source classification, loop arithmetic and run model

pub mod errors;
pub mod model;
pub mod rules;
