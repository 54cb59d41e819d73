//! Public share links for client albums

use crate::types::ClientId;

/// Build the public album link handed out to a client.
///
/// The admin UI copies `{base}/c/{client_id}` to the clipboard; trailing
/// slashes on `base` are ignored.
pub fn share_link(base: &str, client_id: &ClientId) -> String {
    format!("{}/c/{}", base.trim_end_matches('/'), client_id)
}
