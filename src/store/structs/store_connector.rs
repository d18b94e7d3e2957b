/// Builds the peer store selected by the `[store]` configuration section.
#[derive(Debug, Clone, Copy)]
pub struct StoreConnector;
