//! Symbolic identifiers and the numeric-or-symbolic index type.

use crate::sink::BinarySink;
use crate::EncodeError;

/// A symbolic identifier, stored without its leading `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// A reference to an entity, either already numeric or still symbolic.
///
/// Every `Index` in the tree is numeric once the name resolver has run;
/// a symbolic index observed downstream of it is a defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    Num(u32),
    Id(Id),
}

impl Index {
    pub fn is_num(&self) -> bool {
        matches!(self, Index::Num(_))
    }

    pub fn encode(&self, sink: &mut BinarySink) -> Result<(), EncodeError> {
        match self {
            Index::Num(n) => {
                sink.write_u32(*n);
                Ok(())
            }
            Index::Id(id) => Err(EncodeError::UnresolvedIndex(id.as_str().to_owned())),
        }
    }
}

impl From<u32> for Index {
    fn from(num: u32) -> Self {
        Index::Num(num)
    }
}

impl From<Id> for Index {
    fn from(id: Id) -> Self {
        Index::Id(id)
    }
}
