/// Read-only view of the request metadata the engine evaluates.
///
/// Adapters fill this in from their concrete request type. `scheme` must be
/// derived from the transport encryption state (`"https"` when the socket is
/// encrypted, `"http"` otherwise), never from the request line. Absent
/// headers are `None`.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub scheme: &'a str,
    pub host: &'a str,
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}
