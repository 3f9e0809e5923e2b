//! Client-side tracing interceptor with W3C Trace Context propagation

use tonic::metadata::MetadataMap;
use tonic::{Request, Status};

const REQUEST_ID: &str = "x-request-id";
const TRACEPARENT: &str = "traceparent";
const SOURCE_SERVICE: &str = "x-source-service";

/// Interceptor that tags outgoing requests for correlation
///
/// Headers injected:
/// - `traceparent`: W3C Trace Context format (version-trace_id-span_id-flags)
/// - `x-request-id`: UUID for request correlation
/// - `x-source-service`: caller name, when configured
///
/// Values the caller already placed in the request metadata win; the
/// interceptor only fills in what is missing.
///
/// # Example
/// ```ignore
/// use grpc_client::ClientTracingInterceptor;
/// use protos::scintirete::v1::scintirete_service_client::ScintireteServiceClient;
///
/// let tracing = ClientTracingInterceptor::with_service_name("ingest-worker");
/// let client = ScintireteServiceClient::with_interceptor(channel, tracing);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClientTracingInterceptor {
    service_name: Option<String>,
}

impl ClientTracingInterceptor {
    pub fn new() -> Self {
        Self { service_name: None }
    }

    /// Create a tracing interceptor that also announces the calling service
    pub fn with_service_name(service_name: impl Into<String>) -> Self {
        Self {
            service_name: Some(service_name.into()),
        }
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    /// Format: {version}-{trace_id}-{parent_id}-{trace_flags}
    /// Example: 00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01
    fn generate_traceparent() -> String {
        let trace_id = uuid::Uuid::new_v4().as_simple().to_string();
        let span_id = &uuid::Uuid::new_v4().as_simple().to_string()[..16];
        format!("00-{trace_id}-{span_id}-01")
    }

    fn insert_if_absent(
        metadata: &mut MetadataMap,
        key: &'static str,
        value: impl FnOnce() -> String,
    ) -> Result<(), Status> {
        if metadata.contains_key(key) {
            return Ok(());
        }
        let value = value()
            .parse()
            .map_err(|_| Status::internal(format!("Failed to create {key} header")))?;
        metadata.insert(key, value);
        Ok(())
    }
}

impl tonic::service::Interceptor for ClientTracingInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let metadata = request.metadata_mut();

        if let Some(ref name) = self.service_name {
            Self::insert_if_absent(metadata, SOURCE_SERVICE, || name.clone())?;
        }
        Self::insert_if_absent(metadata, TRACEPARENT, Self::generate_traceparent)?;
        Self::insert_if_absent(metadata, REQUEST_ID, || uuid::Uuid::new_v4().to_string())?;

        tracing::trace!(
            target: "grpc_client",
            request_id = ?metadata.get(REQUEST_ID),
            traceparent = ?metadata.get(TRACEPARENT),
            "Outgoing gRPC request with trace context"
        );

        Ok(request)
    }
}
