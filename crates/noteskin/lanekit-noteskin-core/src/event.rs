#![allow(dead_code)]
//! Gameplay events a skin reacts to.
//!
//! Events are produced outside this crate (notefield input handling and
//! the timing judge) and broadcast into a skin's event hub. Each carries
//! the column it happened on; hit and miss also carry the judgement.

use serde::{Deserialize, Serialize};

/// Lane identity: the skin-facing column name plus its field position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    pub name: String,
    pub number: usize,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>, number: usize) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// Timing-accuracy outcome the judge attached to a played or missed note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Judgement {
    /// Window identifier, e.g. "flawless" or "miss".
    pub id: String,
    /// Score weight reported by the judge.
    pub score: f32,
}

impl Judgement {
    pub fn new(id: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// Event classes handlers subscribe under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Press,
    Lift,
    GhostTap,
    Hit,
    Miss,
    HitMine,
    HoldOn,
    HoldOff,
    RollOn,
    RollOff,
    Held,
    LetGo,
}

/// Discrete gameplay signals broadcast into a skin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkinEvent {
    /// The column's key went down (no note consumed).
    Press { column: ColumnRef },
    /// The column's key came back up.
    Lift { column: ColumnRef },
    /// A press with no note close enough to judge.
    GhostTap { column: ColumnRef },
    Hit {
        column: ColumnRef,
        judgement: Judgement,
    },
    Miss {
        column: ColumnRef,
        judgement: Judgement,
    },
    HitMine { column: ColumnRef },
    /// Hold head judged, body engaged.
    HoldOn { column: ColumnRef },
    HoldOff { column: ColumnRef },
    RollOn { column: ColumnRef },
    RollOff { column: ColumnRef },
    /// Hold survived to its tail.
    Held { column: ColumnRef },
    /// Hold released early.
    LetGo { column: ColumnRef },
}

impl SkinEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SkinEvent::Press { .. } => EventKind::Press,
            SkinEvent::Lift { .. } => EventKind::Lift,
            SkinEvent::GhostTap { .. } => EventKind::GhostTap,
            SkinEvent::Hit { .. } => EventKind::Hit,
            SkinEvent::Miss { .. } => EventKind::Miss,
            SkinEvent::HitMine { .. } => EventKind::HitMine,
            SkinEvent::HoldOn { .. } => EventKind::HoldOn,
            SkinEvent::HoldOff { .. } => EventKind::HoldOff,
            SkinEvent::RollOn { .. } => EventKind::RollOn,
            SkinEvent::RollOff { .. } => EventKind::RollOff,
            SkinEvent::Held { .. } => EventKind::Held,
            SkinEvent::LetGo { .. } => EventKind::LetGo,
        }
    }

    pub fn column(&self) -> &ColumnRef {
        match self {
            SkinEvent::Press { column }
            | SkinEvent::Lift { column }
            | SkinEvent::GhostTap { column }
            | SkinEvent::Hit { column, .. }
            | SkinEvent::Miss { column, .. }
            | SkinEvent::HitMine { column }
            | SkinEvent::HoldOn { column }
            | SkinEvent::HoldOff { column }
            | SkinEvent::RollOn { column }
            | SkinEvent::RollOff { column }
            | SkinEvent::Held { column }
            | SkinEvent::LetGo { column } => column,
        }
    }

    /// Judgement payload, present on hit and miss only.
    pub fn judgement(&self) -> Option<&Judgement> {
        match self {
            SkinEvent::Hit { judgement, .. } | SkinEvent::Miss { judgement, .. } => {
                Some(judgement)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_column_dispatch() {
        let column = ColumnRef::new("Left", 0);
        let hit = SkinEvent::Hit {
            column: column.clone(),
            judgement: Judgement::new("flawless", 1.0),
        };
        assert_eq!(hit.kind(), EventKind::Hit);
        assert_eq!(hit.column(), &column);
        assert_eq!(hit.judgement().map(|j| j.id.as_str()), Some("flawless"));

        let press = SkinEvent::Press { column };
        assert_eq!(press.kind(), EventKind::Press);
        assert!(press.judgement().is_none());
    }

    #[test]
    fn event_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&EventKind::GhostTap).unwrap(),
            "\"ghosttap\""
        );
        assert_eq!(
            serde_json::from_str::<EventKind>("\"letgo\"").unwrap(),
            EventKind::LetGo
        );
    }
}
