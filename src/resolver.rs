// File: src/resolver.rs
//! Name-to-ID resolution against the remote service.
//!
//! The service does not enforce name uniqueness, so every lookup settles
//! on the first exact match in the order the service returned the
//! collection. That order is observable but carries no documented
//! guarantee; duplicate names are a known limitation.

use crate::client::Client;
use crate::error::Error;

/// Resolve a board name among the boards owned by `member`.
pub async fn resolve_board(client: &Client, member: &str, name: &str) -> Result<String, Error> {
    let boards = client.boards(member).await?;
    log::debug!("returned boards: {:?}", boards);
    boards
        .into_iter()
        .find(|b| b.name == name)
        .map(|b| b.id)
        .ok_or_else(|| Error::NotFound {
            kind: "board",
            name: name.to_string(),
        })
}

/// Resolve a list name under the given board.
pub async fn resolve_list(client: &Client, board_id: &str, name: &str) -> Result<String, Error> {
    let lists = client.lists(board_id).await?;
    log::debug!("returned lists: {:?}", lists);
    lists
        .into_iter()
        .find(|l| l.name == name)
        .map(|l| l.id)
        .ok_or_else(|| Error::NotFound {
            kind: "list",
            name: name.to_string(),
        })
}

/// Resolve every label name under the given board, preserving caller
/// order in the result.
///
/// One fetch serves all names. A single unresolved name fails the whole
/// call naming that label; no partial result is returned. An empty
/// request succeeds without touching the network.
pub async fn resolve_labels(
    client: &Client,
    board_id: &str,
    names: &[String],
) -> Result<Vec<String>, Error> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let labels = client.labels(board_id).await?;
    log::debug!("returned labels: {:?}", labels);
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let id = labels
            .iter()
            .find(|l| l.name == *name)
            .map(|l| l.id.clone())
            .ok_or_else(|| Error::NotFound {
                kind: "label",
                name: name.clone(),
            })?;
        ids.push(id);
    }
    Ok(ids)
}
