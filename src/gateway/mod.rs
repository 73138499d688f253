pub mod client;
pub mod credentials;
pub mod envelope;

pub use client::{
    AuthenticatedSession, GatewayError, GatewayResult, MutationOutcome, UpstreamGateway,
};
pub use credentials::Credentials;
