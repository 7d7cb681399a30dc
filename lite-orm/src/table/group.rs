use std::fmt;

use crate::table::{ColumnInfo, IndexGroupDef, UniqueGroupDef};

/// The SQLite conflict resolution algorithm applied when a constraint is violated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictAction {
    Rollback,
    Abort,
    #[default]
    Fail,
    Ignore,
    Replace,
}

impl ConflictAction {
    /// Returns the SQL keyword of this action.
    pub fn as_sql(&self) -> &'static str {
        match self {
            ConflictAction::Rollback => "ROLLBACK",
            ConflictAction::Abort => "ABORT",
            ConflictAction::Fail => "FAIL",
            ConflictAction::Ignore => "IGNORE",
            ConflictAction::Replace => "REPLACE",
        }
    }
}

impl fmt::Display for ConflictAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

/// A group of columns which must be unique together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueGroupInfo {
    number: u32,
    on_conflict: ConflictAction,
    columns: Vec<ColumnInfo>,
}

impl UniqueGroupInfo {
    /// Returns the number of the group.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the conflict resolution of the constraint.
    pub fn on_conflict(&self) -> ConflictAction {
        self.on_conflict
    }

    /// Returns the columns of the group, in field order.
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub(crate) fn add_column(&mut self, column: ColumnInfo) {
        self.columns.push(column);
    }
}

impl From<&UniqueGroupDef> for UniqueGroupInfo {
    fn from(def: &UniqueGroupDef) -> Self {
        Self {
            number: def.number,
            on_conflict: def.on_conflict,
            columns: Vec::new(),
        }
    }
}

/// A group of columns indexed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGroupInfo {
    number: u32,
    name: Option<&'static str>,
    unique: bool,
    columns: Vec<ColumnInfo>,
}

impl IndexGroupInfo {
    /// Returns the number of the group.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the declared name of the index, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Returns whether the index is unique.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns the columns of the group, in field order.
    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub(crate) fn add_column(&mut self, column: ColumnInfo) {
        self.columns.push(column);
    }
}

impl From<&IndexGroupDef> for IndexGroupInfo {
    fn from(def: &IndexGroupDef) -> Self {
        Self {
            number: def.number,
            name: def.name.filter(|name| !name.is_empty()),
            unique: def.unique,
            columns: Vec::new(),
        }
    }
}
