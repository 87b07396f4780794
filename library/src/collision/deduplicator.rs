use crate::collision::collision_vertex::CollisionVertex;
use crate::geometry::fixed_point::FixedPosition;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Vertex list after duplicate marking and renumbering. Immutable from here on.
#[derive(Clone, Debug)]
pub struct CompactedVertices {
    vertices: Vec<CollisionVertex>,
    kept: usize,
    merges: usize,
}

/// Exact position match, earliest index stays canonical. Kept vertices are then
/// numbered in original order; merged ones keep their canonical's original index.
#[must_use]
pub fn deduplicate(mut vertices: Vec<CollisionVertex>) -> CompactedVertices {
    let mut canonical: HashMap<FixedPosition, usize> = HashMap::with_capacity(vertices.len());
    let mut merges = 0;
    for index in 0..vertices.len() {
        match canonical.entry(vertices[index].position()) {
            Entry::Occupied(first) => {
                vertices[index].merge_into(*first.get());
                merges += 1;
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }

    let mut kept = 0;
    for vertex in vertices.iter_mut().filter(|vertex| !vertex.useless()) {
        vertex.assign_slot(kept);
        kept += 1;
    }

    CompactedVertices { vertices, kept, merges }
}

impl CompactedVertices {
    #[must_use]
    pub fn merges(&self) -> usize {
        self.merges
    }

    #[must_use]
    pub fn kept_count(&self) -> usize {
        self.kept
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn vertex(&self, index: usize) -> &CollisionVertex {
        &self.vertices[index]
    }

    #[must_use]
    pub fn slot_of(&self, index: usize) -> usize {
        let vertex = &self.vertices[index];
        if vertex.useless() {
            self.vertices[vertex.list()].list()
        } else {
            vertex.list()
        }
    }

    pub fn kept_vertices(&self) -> impl Iterator<Item = &CollisionVertex> {
        self.vertices.iter().filter(|vertex| !vertex.useless())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::material_index::MaterialIndex;

    #[must_use]
    fn make_vertices(positions: &[FixedPosition]) -> Vec<CollisionVertex> {
        positions.iter().enumerate().map(|(index, &position)| CollisionVertex::new(position, MaterialIndex(0), index)).collect()
    }

    #[test]
    fn test_earliest_index_wins() {
        let system_under_test = deduplicate(make_vertices(&[[1, 1, 1], [0, 0, 0], [1, 1, 1], [0, 0, 0], [1, 1, 1]]));

        assert_eq!(system_under_test.merges(), 3);
        assert_eq!(system_under_test.kept_count(), 2);
        assert_eq!(system_under_test.vertex(2).list(), 0);
        assert_eq!(system_under_test.vertex(3).list(), 1);
        assert_eq!(system_under_test.vertex(4).list(), 0);
        assert!(system_under_test.vertex(4).useless());
    }

    #[test]
    fn test_kept_vertices_are_numbered_in_original_order() {
        let system_under_test = deduplicate(make_vertices(&[[5, 0, 0], [5, 0, 0], [6, 0, 0], [7, 0, 0], [6, 0, 0]]));

        let slots: Vec<usize> = system_under_test.kept_vertices().map(|vertex| vertex.list()).collect();
        assert_eq!(slots, vec![0, 1, 2]);
        let positions: Vec<FixedPosition> = system_under_test.kept_vertices().map(|vertex| vertex.position()).collect();
        assert_eq!(positions, vec![[5, 0, 0], [6, 0, 0], [7, 0, 0]]);
    }

    #[test]
    fn test_slot_of_resolves_through_redirect() {
        let system_under_test = deduplicate(make_vertices(&[[9, 9, 9], [1, 2, 3], [4, 5, 6], [1, 2, 3]]));

        assert_eq!(system_under_test.slot_of(3), 1);
        assert_eq!(system_under_test.slot_of(2), 2);
        for index in 0..system_under_test.len() {
            let canonical = system_under_test.vertex(index);
            let resolved = system_under_test.kept_vertices().nth(system_under_test.slot_of(index)).unwrap();
            assert_eq!(resolved.position(), canonical.position());
        }
    }

    #[test]
    fn test_redirect_target_is_kept_with_same_position() {
        let system_under_test = deduplicate(make_vertices(&[[0, 0, 0], [0, 0, 0], [0, 0, 0], [3, 0, 0], [3, 0, 0]]));

        for index in 0..system_under_test.len() {
            let vertex = system_under_test.vertex(index);
            if vertex.useless() {
                let target = system_under_test.vertex(vertex.list());
                assert!(!target.useless());
                assert_eq!(target.position(), vertex.position());
            }
        }
    }

    #[test]
    fn test_deduplication_is_idempotent() {
        let first_pass = deduplicate(make_vertices(&[[0, 0, 0], [1, 0, 0], [0, 0, 0], [2, 0, 0], [1, 0, 0]]));
        let compacted: Vec<CollisionVertex> = first_pass
            .kept_vertices()
            .map(|vertex| CollisionVertex::new(vertex.position(), vertex.material(), vertex.list()))
            .collect();

        let second_pass = deduplicate(compacted);

        assert_eq!(second_pass.merges(), 0);
        assert_eq!(second_pass.kept_count(), first_pass.kept_count());
    }

    #[test]
    fn test_empty_input() {
        let system_under_test = deduplicate(Vec::new());

        assert!(system_under_test.is_empty());
        assert_eq!(system_under_test.kept_count(), 0);
        assert_eq!(system_under_test.merges(), 0);
    }

    #[test]
    fn test_kept_count_matches_quadratic_reference() {
        let positions: Vec<FixedPosition> = (0..60).map(|i: i16| [i % 7, (i * 3) % 5, i % 2]).collect();

        let system_under_test = deduplicate(make_vertices(&positions));

        let reference = (0..positions.len()).filter(|&j| (0..j).all(|i| positions[i] != positions[j])).count();
        assert_eq!(system_under_test.kept_count(), reference);
        assert_eq!(system_under_test.merges(), positions.len() - reference);
    }
}
