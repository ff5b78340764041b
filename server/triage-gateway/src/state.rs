//! Shared application state.

use crate::client::ServiceClient;

pub struct AppState {
  pub client: ServiceClient,
}
