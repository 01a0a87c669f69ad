/// Shared application state, available to all route handlers via
/// `State<Arc<AppState<A, V>>>`. Generic over the stores so the integration
/// tests can run against the in-memory implementations.
pub struct AppState<A, V> {
    pub administrators: A,
    pub vehicles: V,
    /// Symmetric signing key for bearer tokens, immutable for the process
    /// lifetime. Required at startup; there is no default.
    pub jwt_secret: String,
}
