//! gRPC transport for the lookup service.

mod user_grpc;

pub use user_grpc::UserGrpcService;
