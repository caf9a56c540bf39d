// File: src/controller.rs
//! Capture pipeline: parse the input, resolve names to IDs, submit the
//! card. Steps run strictly in sequence and stop at the first error; the
//! binary is the only recovery boundary.

use crate::client::Client;
use crate::config::Config;
use crate::error::Error;
use crate::model::Card;
use crate::parser::extract_attr;
use crate::resolver::{resolve_board, resolve_labels, resolve_list};

/// Account handle whose boards are searched.
const BOARD_OWNER: &str = "me";

/// Create one card from a title and optional description, both of which
/// may carry inline tags.
pub async fn add_task(
    client: &Client,
    config: &Config,
    title: &str,
    desc: &str,
) -> Result<(), Error> {
    let (title, title_attr) = extract_attr(title);
    let (desc, desc_attr) = extract_attr(desc);
    // The description sits after the title in the invocation, so its list
    // and board tags take precedence.
    let attr = title_attr.merge(desc_attr);
    log::debug!("adding task {} - {} {:?}", title, desc, attr);

    let board_name = attr
        .board
        .or_else(|| config.board.clone())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            Error::Config(
                "no board given: add a #board tag or set \"board\" in the config file".to_string(),
            )
        })?;
    let board_id = resolve_board(client, BOARD_OWNER, &board_name).await?;
    log::debug!("found board {}: {}", board_name, board_id);

    let list_name = attr.list.unwrap_or_else(|| config.list.clone());
    let list_id = resolve_list(client, &board_id, &list_name).await?;
    log::debug!("found list {}: {}", list_name, list_id);

    let label_ids = resolve_labels(client, &board_id, &attr.labels).await?;
    log::debug!("found labels {:?}: {:?}", attr.labels, label_ids);

    let card = Card {
        name: title,
        desc,
        id_list: list_id,
        id_labels: label_ids.join(","),
    };
    client.create_card(&card).await
}
