pub mod service_status;

pub use service_status::ServiceStatus;
