use tracing::instrument;

use crate::services::network_manager::{ConnectionRef, Iface, NetworkError, NetworkModel};

/// Names of the interfaces a connection may run over.
///
/// Keeps enumeration order, skips the interface already owned by
/// `connection`, and keeps only interfaces the model finds interesting.
pub fn parent_choices(
    model: &dyn NetworkModel,
    interfaces: &[Iface],
    connection: Option<&ConnectionRef>,
) -> Vec<String> {
    interfaces
        .iter()
        .filter(|iface| {
            !model.is_interface_connection(iface, connection)
                && model.is_interesting_interface(iface)
        })
        .map(|iface| iface.name.clone())
        .collect()
}

/// Enumerates interfaces and derives the parent choices from a fresh listing.
///
/// # Errors
/// Returns `NetworkError` if the interfaces cannot be listed.
#[instrument(skip(model))]
pub async fn load_parent_choices(
    model: &dyn NetworkModel,
    connection: Option<&ConnectionRef>,
) -> Result<Vec<String>, NetworkError> {
    let interfaces = model.list_interfaces().await?;
    Ok(parent_choices(model, &interfaces, connection))
}
