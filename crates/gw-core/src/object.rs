//! Interactable objects: the things the player can examine, take, and use.

use std::fmt;

use crate::room::RoomId;

/// Identifies an object by its position in the world's object table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An interactable entity with a location, interaction flags, and a
/// status-indexed message.
///
/// Objects are never destroyed: an object held by the player or removed
/// from the world has `location == None`. The alias list is a literal,
/// exact-case enumeration; resolution matches these strings and nothing
/// else, so every accepted spelling must appear here.
#[derive(Debug, Clone)]
pub struct GameObject {
    /// The object's proper name, as listed in inventory output.
    pub name: String,
    /// Alternate tokens that resolve to this object. Together with the
    /// name these must be case-sensitively distinct.
    pub aliases: Vec<String>,
    /// Text printed when the object is examined.
    pub description: String,
    /// The room holding this object, or `None` when held or removed.
    pub location: Option<RoomId>,
    /// Whether the object is a valid target for Use.
    pub usable: bool,
    /// Whether the object is a valid target for Take.
    pub takable: bool,
    /// Index into `status_messages`, or `None` for statusless objects.
    pub status: Option<usize>,
    /// Text printed on a successful Use.
    pub use_message: String,
    /// Text printed on a successful Take.
    pub take_message: String,
    /// One message per status value, selected by `status`.
    pub status_messages: Vec<String>,
}

impl GameObject {
    /// Create a statusless object that is nowhere, unusable, and untakable.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            location: None,
            usable: false,
            takable: false,
            status: None,
            use_message: String::new(),
            take_message: String::new(),
            status_messages: Vec::new(),
        }
    }

    /// Set the literal alias list.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Place the object in a room.
    pub fn at(mut self, room: RoomId) -> Self {
        self.location = Some(room);
        self
    }

    /// Mark the object as a valid Use target.
    pub fn usable(mut self) -> Self {
        self.usable = true;
        self
    }

    /// Mark the object as a valid Take target.
    pub fn takable(mut self) -> Self {
        self.takable = true;
        self
    }

    /// Give the object a status and its message table.
    pub fn with_status<I, S>(mut self, initial: usize, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status = Some(initial);
        self.status_messages = messages.into_iter().map(Into::into).collect();
        self
    }

    /// Set the text printed on a successful Use.
    pub fn with_use_message(mut self, message: impl Into<String>) -> Self {
        self.use_message = message.into();
        self
    }

    /// Set the text printed on a successful Take.
    pub fn with_take_message(mut self, message: impl Into<String>) -> Self {
        self.take_message = message.into();
        self
    }

    /// The message for the object's current status, or `None` for
    /// statusless objects.
    ///
    /// # Panics
    ///
    /// Panics if a runtime status write broke the index invariant; a status
    /// set through [`World::set_object_status`](crate::World::set_object_status)
    /// must stay within the message table.
    pub fn status_message(&self) -> Option<&str> {
        self.status.map(|status| self.status_messages[status].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_object_is_inert() {
        let object = GameObject::new("Tablet", "A stone tablet.");
        assert_eq!(object.location, None);
        assert!(!object.usable);
        assert!(!object.takable);
        assert_eq!(object.status, None);
        assert_eq!(object.status_message(), None);
    }

    #[test]
    fn builder_chain_sets_properties() {
        let object = GameObject::new("Onion", "A fresh onion.")
            .with_aliases(["ONION", "onion"])
            .at(RoomId(2))
            .usable()
            .takable()
            .with_take_message("You dig up an onion.");
        assert_eq!(object.aliases, vec!["ONION", "onion"]);
        assert_eq!(object.location, Some(RoomId(2)));
        assert!(object.usable);
        assert!(object.takable);
        assert_eq!(object.take_message, "You dig up an onion.");
    }

    #[test]
    fn status_message_selects_by_index() {
        let mut object = GameObject::new("Gate", "A polished gate.")
            .with_status(0, ["The gate is locked.", "The gate is unlocked."]);
        assert_eq!(object.status_message(), Some("The gate is locked."));
        object.status = Some(1);
        assert_eq!(object.status_message(), Some("The gate is unlocked."));
    }
}
