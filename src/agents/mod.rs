pub mod advisor;
pub mod finance;
pub mod reasoning;
pub mod support;
