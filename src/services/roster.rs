use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Member;

/// The resolved member set for a period: the members shared costs are
/// divided across and the members a balance sheet is produced for.
///
/// Iteration order is insertion order. Duplicate ids collapse to one entry
/// with last-write-wins on the display name; duplicates are a defensive
/// tolerance, not an expected input shape.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<Member>,
    index: HashMap<Uuid, usize>,
}

impl Roster {
    /// Resolves the active-member list supplied by the caller.
    pub fn resolve(members: &[Member]) -> Self {
        let mut roster = Self::default();
        for member in members {
            roster.insert(member.clone());
        }
        roster
    }

    fn insert(&mut self, member: Member) {
        match self.index.get(&member.id) {
            Some(&pos) => self.members[pos].display_name = member.display_name,
            None => {
                self.index.insert(member.id, self.members.len());
                self.members.push(member);
            }
        }
    }

    /// Number of members shared costs are divided across.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if the member id belongs to the roster.
    pub fn contains(&self, member_id: Uuid) -> bool {
        self.index.contains_key(&member_id)
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Roster size as a decimal divisor for equal shared-cost splits.
    pub fn divisor(&self) -> Decimal {
        Decimal::from(self.members.len())
    }
}
