use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use super::policy::PairingPolicy;
use crate::error::PairingError;

/// Partner name reported for a link that holds a non-entity value
pub const FOREIGN_PARTNER_LABEL: &str = "<foreign>";

/// What an entity's partner slot points at
enum Link {
    /// Non-owning back-reference, so a mutual pair does not keep itself alive
    Entity(Weak<Entity>),
    /// Value recorded by a rejected pairing under `PairingPolicy::Asymmetric`
    Foreign(Rc<dyn Any>),
}

/// A person-like entity with a name and an optional partner
///
/// Entities are handed out as `Rc<Entity>`; the partner link is interior
/// mutable so both sides of a pairing can be updated through shared handles.
pub struct Entity {
    name: String,
    partner: RefCell<Option<Link>>,
}

impl Entity {
    /// Create a new unpaired entity
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            partner: RefCell::new(None),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current partner, if it is an entity that is still alive
    pub fn partner(&self) -> Option<Rc<Entity>> {
        match self.partner.borrow().as_ref()? {
            Link::Entity(partner) => partner.upgrade(),
            Link::Foreign(_) => None,
        }
    }

    /// The non-entity value recorded by an asymmetric pairing failure
    pub fn foreign_partner(&self) -> Option<Rc<dyn Any>> {
        match self.partner.borrow().as_ref()? {
            Link::Foreign(value) => Some(Rc::clone(value)),
            Link::Entity(_) => None,
        }
    }

    /// Name of the partner, or `FOREIGN_PARTNER_LABEL` for a foreign link
    pub fn partner_name(&self) -> Option<String> {
        match self.partner.borrow().as_ref()? {
            Link::Entity(partner) => partner.upgrade().map(|p| p.name.clone()),
            Link::Foreign(_) => Some(FOREIGN_PARTNER_LABEL.to_string()),
        }
    }

    /// Returns true if this entity's partner link points at `other`
    pub fn is_paired_with(&self, other: &Entity) -> bool {
        self.partner()
            .is_some_and(|partner| std::ptr::eq(Rc::as_ptr(&partner), other))
    }

    /// Pair this entity with `other` under the default (transactional) policy
    ///
    /// `other` may be any value; only an `Entity` is accepted. On success both
    /// sides point at each other. Pairing again silently replaces the previous
    /// partner and leaves the old partner's link as it was.
    pub fn pair(self: &Rc<Self>, other: Rc<dyn Any>) -> Result<(), PairingError> {
        self.pair_with_policy(other, PairingPolicy::default())
    }

    /// Pair this entity with `other`, treating a rejected argument per `policy`
    pub fn pair_with_policy(
        self: &Rc<Self>,
        other: Rc<dyn Any>,
        policy: PairingPolicy,
    ) -> Result<(), PairingError> {
        match other.downcast::<Entity>() {
            Ok(other) => {
                self.link(Link::Entity(Rc::downgrade(&other)));
                other.link(Link::Entity(Rc::downgrade(self)));
                debug!(entity = %self.name, partner = %other.name, "paired entities");
                Ok(())
            }
            Err(foreign) => {
                if policy == PairingPolicy::Asymmetric {
                    self.link(Link::Foreign(foreign));
                }
                warn!(entity = %self.name, %policy, "rejected pairing with a non-entity value");
                Err(PairingError::new())
            }
        }
    }

    fn link(&self, link: Link) {
        *self.partner.borrow_mut() = Some(link);
    }
}

// Partner is printed by name only; following the link would recurse forever
impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("name", &self.name)
            .field("partner", &self.partner_name())
            .finish()
    }
}

// Custom serialization to flatten the partner link into its name for CSV output
#[derive(Serialize)]
struct EntitySerialized<'a> {
    name: &'a str,
    partner: Option<String>,
}

impl Serialize for Entity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wrapper = EntitySerialized {
            name: &self.name,
            partner: self.partner_name(), // Resolve on-the-fly
        };
        wrapper.serialize(serializer)
    }
}
