// ==========================================
// Shared test builders
// ==========================================
// Builder helpers for board fixtures, used by the integration
// suites. Defaults produce a plausible row; override what the test
// cares about.
// ==========================================

#![allow(dead_code)]

use logistics_board::domain::row::{Board, Row, StageData};
use logistics_board::domain::status;
use logistics_board::domain::types::StageId;

/// Builder for a single row.
pub struct RowBuilder {
    id: String,
    status: String,
    note: String,
    wagon_number: String,
}

impl RowBuilder {
    pub fn new() -> Self {
        RowBuilder {
            id: "любой".to_string(),
            status: status::FULFILLED.to_string(),
            note: String::new(),
            wagon_number: String::new(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    pub fn wagon(mut self, wagon_number: &str) -> Self {
        self.wagon_number = wagon_number.to_string();
        self
    }

    pub fn build(self) -> Row {
        Row::new(self.id, self.status, self.note, self.wagon_number)
    }
}

/// Builder for a board with selected stages populated.
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::default(),
        }
    }

    pub fn stage(mut self, stage: StageId, rows: Vec<Row>) -> Self {
        *self.board.stage_mut(stage) = StageData::new(rows);
        self
    }

    pub fn build(self) -> Board {
        self.board
    }
}

/// A wagon-bound fulfilled row.
pub fn fulfilled_row(wagon: &str) -> Row {
    RowBuilder::new().wagon(wagon).build()
}

/// An unfulfilled placeholder row without a wagon.
pub fn unfulfilled_row() -> Row {
    RowBuilder::new()
        .status(status::UNFULFILLED_BY_CONSTRAINT)
        .build()
}
