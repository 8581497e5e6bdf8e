pub mod app;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;

pub mod proto {
    tonic::include_proto!("auth");
}
