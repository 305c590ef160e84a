//! Room-graph consistency audit.
//!
//! A link from room A to room B in direction D should be mirrored by a link
//! from B back to A in the opposite direction. Authoring tools own that
//! invariant; the engine only needs to tolerate broken links and report
//! them. This audit walks a set of rooms and lists every violation without
//! mutating anything.

use std::collections::HashMap;

use crate::entities::Room;
use crate::ids::RoomId;
use crate::value_objects::Direction;

/// Why a link failed the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The link references a room that does not exist.
    Dangling,
    /// The referenced room exists but does not link back.
    OneWay,
}

/// A single broken link found by [`audit_links`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkViolation {
    pub from: RoomId,
    pub direction: Direction,
    pub to: RoomId,
    pub kind: ViolationKind,
}

/// Audit every directional link among `rooms` for bidirectional consistency.
pub fn audit_links<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Vec<LinkViolation> {
    let rooms: Vec<&Room> = rooms.into_iter().collect();
    let by_id: HashMap<RoomId, &Room> = rooms.iter().map(|r| (r.id, *r)).collect();

    let mut violations = Vec::new();
    for room in rooms {
        for (direction, target_id) in room.exits() {
            match by_id.get(&target_id) {
                None => violations.push(LinkViolation {
                    from: room.id,
                    direction,
                    to: target_id,
                    kind: ViolationKind::Dangling,
                }),
                Some(target) => {
                    if target.neighbor(direction.opposite()) != Some(room.id) {
                        violations.push(LinkViolation {
                            from: room.id,
                            direction,
                            to: target_id,
                            kind: ViolationKind::OneWay,
                        });
                    }
                }
            }
        }
    }
    violations
}
