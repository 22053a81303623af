use models::Keyed;

/// Where a new item lands when its id is not already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Replace the item with the same id in place, or insert it at `placement`.
pub fn upsert<T: Keyed>(items: &mut Vec<T>, item: T, placement: Placement) {
    match items.iter().position(|existing| existing.id() == item.id()) {
        Some(idx) => items[idx] = item,
        None => match placement {
            Placement::Front => items.insert(0, item),
            Placement::Back => items.push(item),
        },
    }
}

/// Remove the item with `id`; returns whether anything was removed.
pub fn remove<T: Keyed>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::defaults::{default_projects, default_stacks};

    fn ids<T: Keyed>(items: &[T]) -> Vec<&str> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn new_ids_go_to_the_requested_end() {
        let mut projects = default_projects();
        let mut fresh = projects[0].clone();
        fresh.id = "zephyr".into();
        upsert(&mut projects, fresh, Placement::Front);
        assert_eq!(ids(&projects), ["zephyr", "aurora", "atlas", "pulse"]);

        let mut stacks = default_stacks();
        let mut rust = stacks[0].clone();
        rust.id = "rust".into();
        upsert(&mut stacks, rust, Placement::Back);
        assert_eq!(ids(&stacks).last(), Some(&"rust"));
        assert_eq!(stacks.len(), 6);
    }

    #[test]
    fn existing_id_is_replaced_in_position() {
        let mut projects = default_projects();
        let mut atlas = projects[1].clone();
        atlas.title = "Atlas v2".into();
        upsert(&mut projects, atlas.clone(), Placement::Front);
        assert_eq!(ids(&projects), ["aurora", "atlas", "pulse"]);
        assert_eq!(projects[1], atlas);

        // same item again changes nothing
        let snapshot = projects.clone();
        upsert(&mut projects, atlas, Placement::Front);
        assert_eq!(projects, snapshot);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut stacks = default_stacks();
        let before = stacks.clone();
        assert!(!remove(&mut stacks, "cobol"));
        assert_eq!(stacks, before);

        assert!(remove(&mut stacks, "next"));
        assert_eq!(ids(&stacks), ["react", "tailwind", "node", "supabase"]);
    }
}
