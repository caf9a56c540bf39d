// File: src/model.rs
use serde::{Deserialize, Serialize};

/// A remote board, composed of lists and owned by an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Board {
    pub name: String,
    pub id: String,
}

/// A list under a board, holding cards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct List {
    pub name: String,
    pub id: String,
}

/// A label attachable to cards, scoped to a board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
    pub id: String,
}

/// Card creation payload. Field names follow the remote wire protocol;
/// `id_labels` is the comma-joined label IDs in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: String,
    pub desc: String,
    #[serde(rename = "idList")]
    pub id_list: String,
    #[serde(rename = "idLabels")]
    pub id_labels: String,
}

/// Attributes extracted from free text: zero or more labels in order of
/// first appearance (duplicates kept), at most one list and one board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskAttr {
    pub labels: Vec<String>,
    pub list: Option<String>,
    pub board: Option<String>,
}

impl TaskAttr {
    /// Combine attributes parsed from two input fields. `later` comes from
    /// text positioned after `self` in the invocation, so its list and
    /// board override; labels concatenate.
    pub fn merge(mut self, later: TaskAttr) -> TaskAttr {
        self.labels.extend(later.labels);
        TaskAttr {
            labels: self.labels,
            list: later.list.or(self.list),
            board: later.board.or(self.board),
        }
    }
}
