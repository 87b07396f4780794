use crate::collision::deduplicator::CompactedVertices;
use crate::conversion::context::ConversionContext;
use crate::geometry::axis::Axis;
use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::material::material_index::MaterialIndex;

#[must_use]
pub(crate) fn collision_label(asset: &str) -> String {
    format!("{asset}_collision")
}

#[must_use]
pub fn write_collision(asset: &str, vertices: &CompactedVertices, context: &ConversionContext) -> String {
    let mut lines: Vec<String> = vec![format!("glabel {}", collision_label(asset)), "colInit".to_string()];

    lines.push(format!("colVertexInit {}", vertices.kept_count()));
    for vertex in vertices.kept_vertices() {
        let position = vertex.position();
        lines.push(format!("colVertex {}, {}, {}", position[Axis::X.index()], position[Axis::Y.index()], position[Axis::Z.index()]));
    }

    for material in context.materials().iter().filter(|material| material.triangles() > 0) {
        let triangles = material_triangles(vertices, material.index());
        debug_assert_eq!(triangles.len(), material.triangles());
        lines.push(format!("colTriInit {}, {}", material.surface(), triangles.len()));
        for [a, b, c] in triangles {
            lines.push(format!("colTri {a}, {b}, {c}"));
        }
    }

    lines.push("colTriStop".to_string());
    lines.push("colEnd".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[must_use]
fn material_triangles(vertices: &CompactedVertices, material: MaterialIndex) -> Vec<[usize; VERTICES_IN_TRIANGLE]> {
    (0..vertices.len())
        .step_by(VERTICES_IN_TRIANGLE)
        .filter(|&first| vertices.vertex(first).material() == material)
        .map(|first| [vertices.slot_of(first), vertices.slot_of(first + 1), vertices.slot_of(first + 2)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::collision_vertex::collect_collision_vertices;
    use crate::collision::deduplicator::deduplicate;
    use crate::geometry::alias::Point;
    use crate::scene::scene_graph::{Face, Mesh, MeshIndex, MeshVertex, Node, Scene};

    #[must_use]
    fn make_two_material_scene() -> Scene {
        let quad = vec![
            MeshVertex::at(Point::new(0.0, 0.0, 0.0)),
            MeshVertex::at(Point::new(1.0, 0.0, 0.0)),
            MeshVertex::at(Point::new(1.0, 0.0, 1.0)),
            MeshVertex::at(Point::new(0.0, 0.0, 1.0)),
        ];
        let floor = Mesh::new(quad.clone(), vec![Face([0, 1, 2]), Face([0, 2, 3])], MaterialIndex(1));
        let ledge = Mesh::new(quad, vec![Face([3, 2, 1])], MaterialIndex(0));
        let root = Node::new("root").with_mesh(MeshIndex(0)).with_child(Node::new("ledge").with_mesh(MeshIndex(1)));
        Scene::new(root, vec![floor, ledge], vec!["Ledge !SURF_HANGABLE".to_string(), "Floor".to_string(), "Spare".to_string()])
    }

    #[test]
    fn test_write_collision() {
        let scene = make_two_material_scene();
        let context = ConversionContext::new(&scene);
        let vertices = deduplicate(collect_collision_vertices(&scene, 100.0));

        let actual = write_collision("castle", &vertices, &context);

        let expected = "\
glabel castle_collision
colInit
colVertexInit 4
colVertex 0, 0, 0
colVertex 100, 0, 0
colVertex 100, 0, 100
colVertex 0, 0, 100
colTriInit SURF_HANGABLE, 1
colTri 3, 2, 1
colTriInit SURF_ENV_DEFAULT, 2
colTri 0, 1, 2
colTri 0, 2, 3
colTriStop
colEnd
";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_vertex_lines_match_kept_count() {
        let scene = make_two_material_scene();
        let context = ConversionContext::new(&scene);
        let vertices = deduplicate(collect_collision_vertices(&scene, 1.0));

        let actual = write_collision("castle", &vertices, &context);

        assert_eq!(actual.lines().filter(|line| line.starts_with("colVertex ")).count(), vertices.kept_count());
    }
}
