pub mod dashboards;
pub mod system;
