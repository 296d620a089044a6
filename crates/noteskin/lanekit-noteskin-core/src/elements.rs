#![allow(dead_code)]
//! Element tables and descriptor resolution.
//!
//! A skin declares, per column name, a map from element key to either a
//! generator or a redirect. Resolution walks redirect chains with an
//! explicit visited set, so authoring mistakes surface as errors instead
//! of hangs.

use crate::error::SkinError;
use crate::event::ColumnRef;
use crate::node::SharedNode;
use crate::noteskin::ElementCtx;
use hashbrown::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

/// Key naming one visual inside a column: "Receptor", "Tap", "Mine", ...
pub type ElementKey = String;

/// Builds the node for one (column, element) pair. Runs inside
/// `get_element`; the context lets it read metrics, register hub hooks
/// for the node it returns, and build sibling elements.
pub type Generator = Rc<dyn Fn(&mut ElementCtx<'_>) -> Result<SharedNode, SkinError>>;

/// Identifies which visual to produce for which lane.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementDescriptor {
    pub column_name: String,
    pub column_number: usize,
    pub element: ElementKey,
}

impl ElementDescriptor {
    pub fn new(column_name: impl Into<String>, column_number: usize, element: &str) -> Self {
        Self {
            column_name: column_name.into(),
            column_number,
            element: element.to_string(),
        }
    }
}

/// One entry in a skin's element table.
#[derive(Clone)]
pub enum ElementDef {
    Generator(Generator),
    /// Alias to another element, optionally re-targeting the column.
    /// Overrides apply only where given; the rest carries over from the
    /// step being redirected.
    Redirect {
        element: ElementKey,
        column_name: Option<String>,
        column_number: Option<usize>,
    },
}

impl ElementDef {
    /// Plain same-column alias.
    pub fn redirect(element: &str) -> Self {
        ElementDef::Redirect {
            element: element.to_string(),
            column_name: None,
            column_number: None,
        }
    }
}

impl fmt::Debug for ElementDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementDef::Generator(_) => f.write_str("Generator(..)"),
            ElementDef::Redirect {
                element,
                column_name,
                column_number,
            } => f
                .debug_struct("Redirect")
                .field("element", element)
                .field("column_name", column_name)
                .field("column_number", column_number)
                .finish(),
        }
    }
}

/// Per-column element tables, keyed by column name.
pub type ElementMap = HashMap<String, HashMap<ElementKey, ElementDef>>;

/// Resolve a descriptor to its generator, following redirects. Returns
/// the generator together with the column the chain landed on.
pub fn resolve(
    map: &ElementMap,
    desc: &ElementDescriptor,
) -> Result<(Generator, ColumnRef), SkinError> {
    let mut column = ColumnRef::new(desc.column_name.clone(), desc.column_number);
    let mut element = desc.element.clone();
    let mut visited: HashSet<(String, ElementKey)> = HashSet::new();
    visited.insert((column.name.clone(), element.clone()));

    loop {
        let def = map
            .get(&column.name)
            .and_then(|col| col.get(&element))
            .ok_or_else(|| SkinError::MissingMapping {
                column: column.name.clone(),
                element: element.clone(),
            })?;
        match def {
            ElementDef::Generator(generator) => return Ok((generator.clone(), column)),
            ElementDef::Redirect {
                element: next,
                column_name,
                column_number,
            } => {
                if let Some(name) = column_name {
                    column.name = name.clone();
                }
                if let Some(number) = column_number {
                    column.number = *number;
                }
                element = next.clone();
                if !visited.insert((column.name.clone(), element.clone())) {
                    return Err(SkinError::RedirectCycle {
                        column: column.name.clone(),
                        element,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn generator(sprite: &'static str) -> Generator {
        Rc::new(move |_ctx: &mut ElementCtx<'_>| Ok(Node::with_sprite(sprite)))
    }

    fn insert(map: &mut ElementMap, column: &str, element: &str, def: ElementDef) {
        map.entry(column.to_string())
            .or_default()
            .insert(element.to_string(), def);
    }

    #[test]
    fn resolves_a_direct_generator() {
        let mut map = ElementMap::new();
        let tap = generator("left-tap");
        insert(&mut map, "Left", "Tap", ElementDef::Generator(tap.clone()));

        let (resolved, column) = resolve(&map, &ElementDescriptor::new("Left", 0, "Tap")).unwrap();
        assert!(Rc::ptr_eq(&resolved, &tap));
        assert_eq!(column, ColumnRef::new("Left", 0));
    }

    #[test]
    fn redirect_inherits_the_current_column() {
        let mut map = ElementMap::new();
        let tap = generator("left-tap");
        insert(&mut map, "Left", "Tap", ElementDef::Generator(tap.clone()));
        insert(&mut map, "Left", "Fake", ElementDef::redirect("Tap"));

        let (resolved, column) = resolve(&map, &ElementDescriptor::new("Left", 0, "Fake")).unwrap();
        assert!(Rc::ptr_eq(&resolved, &tap));
        assert_eq!(column, ColumnRef::new("Left", 0));
    }

    #[test]
    fn redirect_overrides_apply_where_given() {
        let mut map = ElementMap::new();
        let tap = generator("left-tap");
        insert(&mut map, "Left", "Tap", ElementDef::Generator(tap.clone()));
        insert(
            &mut map,
            "Up",
            "Tap",
            ElementDef::Redirect {
                element: "Tap".to_string(),
                column_name: Some("Left".to_string()),
                column_number: None,
            },
        );

        // Column name is overridden, the number carries over.
        let (resolved, column) = resolve(&map, &ElementDescriptor::new("Up", 2, "Tap")).unwrap();
        assert!(Rc::ptr_eq(&resolved, &tap));
        assert_eq!(column, ColumnRef::new("Left", 2));
    }

    #[test]
    fn redirect_chains_apply_overrides_hop_by_hop() {
        let mut map = ElementMap::new();
        let tap = generator("left-tap");
        insert(&mut map, "Left", "Tap", ElementDef::Generator(tap.clone()));
        insert(
            &mut map,
            "Left",
            "Ghost",
            ElementDef::Redirect {
                element: "Tap".to_string(),
                column_name: None,
                column_number: Some(0),
            },
        );
        insert(
            &mut map,
            "Down",
            "Lift",
            ElementDef::Redirect {
                element: "Ghost".to_string(),
                column_name: Some("Left".to_string()),
                column_number: None,
            },
        );

        // Down/Lift hops to Left keeping number 3, then Ghost pins the
        // number to 0 on its way to Tap.
        let (resolved, column) = resolve(&map, &ElementDescriptor::new("Down", 3, "Lift")).unwrap();
        assert!(Rc::ptr_eq(&resolved, &tap));
        assert_eq!(column, ColumnRef::new("Left", 0));
    }

    #[test]
    fn missing_mapping_is_an_error() {
        let map = ElementMap::new();
        let err = resolve(&map, &ElementDescriptor::new("Left", 0, "Tap")).err();
        assert_eq!(
            err,
            Some(SkinError::MissingMapping {
                column: "Left".to_string(),
                element: "Tap".to_string(),
            })
        );
    }

    #[test]
    fn missing_mapping_names_the_end_of_the_chain() {
        let mut map = ElementMap::new();
        insert(&mut map, "Left", "Fake", ElementDef::redirect("Tap"));
        insert(
            &mut map,
            "Up",
            "Fake",
            ElementDef::Redirect {
                element: "Fake".to_string(),
                column_name: Some("Left".to_string()),
                column_number: None,
            },
        );

        // The walk lands on Left/Tap, which nothing maps; the error
        // reports that pair, not the requested one.
        let err = resolve(&map, &ElementDescriptor::new("Up", 1, "Fake")).err();
        assert_eq!(
            err,
            Some(SkinError::MissingMapping {
                column: "Left".to_string(),
                element: "Tap".to_string(),
            })
        );
    }

    #[test]
    fn two_step_cycle_is_detected() {
        let mut map = ElementMap::new();
        insert(&mut map, "Left", "A", ElementDef::redirect("B"));
        insert(&mut map, "Left", "B", ElementDef::redirect("A"));

        let err = resolve(&map, &ElementDescriptor::new("Left", 0, "A")).err();
        assert_eq!(
            err,
            Some(SkinError::RedirectCycle {
                column: "Left".to_string(),
                element: "A".to_string(),
            })
        );
    }

    #[test]
    fn self_redirect_is_detected() {
        let mut map = ElementMap::new();
        insert(&mut map, "Left", "A", ElementDef::redirect("A"));

        let err = resolve(&map, &ElementDescriptor::new("Left", 0, "A")).err();
        assert!(matches!(err, Some(SkinError::RedirectCycle { .. })));
    }

    #[test]
    fn cross_column_cycle_is_detected() {
        let mut map = ElementMap::new();
        insert(
            &mut map,
            "Left",
            "Tap",
            ElementDef::Redirect {
                element: "Tap".to_string(),
                column_name: Some("Right".to_string()),
                column_number: None,
            },
        );
        insert(
            &mut map,
            "Right",
            "Tap",
            ElementDef::Redirect {
                element: "Tap".to_string(),
                column_name: Some("Left".to_string()),
                column_number: None,
            },
        );

        let err = resolve(&map, &ElementDescriptor::new("Left", 0, "Tap")).err();
        assert!(matches!(err, Some(SkinError::RedirectCycle { .. })));
    }
}
