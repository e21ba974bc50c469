//! Object name resolution by exact token match.

use gw_core::{ObjectId, World};

/// Resolve a free-text token to an object identity.
///
/// Scans the object table in order twice: first for an object whose name
/// equals the token, then for one whose alias list contains it. Within each
/// pass the lower id wins. Matching is exact-string and case-sensitive;
/// the content enumerates its accepted case variants literally, and the
/// resolver accepts nothing beyond that enumeration.
pub fn resolve_object(world: &World, token: &str) -> Option<ObjectId> {
    world
        .objects()
        .find(|(_, object)| object.name == token)
        .or_else(|| {
            world
                .objects()
                .find(|(_, object)| object.aliases.iter().any(|alias| alias == token))
        })
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::{GameObject, Room};

    fn test_world() -> World {
        let rooms = vec![Room::new("A vault.")];
        let objects = vec![
            GameObject::new("Lantern", "A dented lantern.")
                .with_aliases(["LANTERN", "lantern", "Lamp"]),
            GameObject::new("Lamp", "A brass lamp."),
            GameObject::new("Chain", "A length of chain.").with_aliases(["Links"]),
            GameObject::new("Rope", "A coil of rope.").with_aliases(["Links", "Line"]),
        ];
        World::new(rooms, objects).unwrap()
    }

    #[test]
    fn resolves_by_name() {
        let world = test_world();
        assert_eq!(resolve_object(&world, "Chain"), Some(ObjectId(2)));
    }

    #[test]
    fn resolves_by_alias() {
        let world = test_world();
        assert_eq!(resolve_object(&world, "LANTERN"), Some(ObjectId(0)));
        assert_eq!(resolve_object(&world, "Line"), Some(ObjectId(3)));
    }

    #[test]
    fn name_pass_runs_before_alias_pass() {
        // "Lamp" is an alias of object 0 and the name of object 1; the name
        // match wins even though the alias sits earlier in the table.
        let world = test_world();
        assert_eq!(resolve_object(&world, "Lamp"), Some(ObjectId(1)));
    }

    #[test]
    fn shared_alias_resolves_to_lower_id() {
        let world = test_world();
        assert_eq!(resolve_object(&world, "Links"), Some(ObjectId(2)));
    }

    #[test]
    fn matching_is_exact_case() {
        let world = test_world();
        assert_eq!(resolve_object(&world, "lantern"), Some(ObjectId(0)));
        assert_eq!(resolve_object(&world, "LaNtErN"), None);
        assert_eq!(resolve_object(&world, "lamp"), None);
    }

    #[test]
    fn unknown_token_misses() {
        let world = test_world();
        assert_eq!(resolve_object(&world, "Candle"), None);
        assert_eq!(resolve_object(&world, ""), None);
    }
}
