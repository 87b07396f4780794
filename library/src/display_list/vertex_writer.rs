use crate::config::settings::ExportFormat;
use crate::display_list::grouping::VertexGrouping;
use crate::display_list::vertex_buffer::{DisplayVertex, VertexBuffer};
use std::fmt::Write;

#[must_use]
pub(crate) fn vertex_buffer_label(asset: &str, slot: usize) -> String {
    format!("{asset}_vertex_{slot}")
}

#[must_use]
fn assembly_vertex(vertex: &DisplayVertex) -> String {
    let [x, y, z] = vertex.position;
    let [u, v] = vertex.texture_coordinate;
    let [r, g, b, a] = vertex.shade;
    format!("vertex {x}, {y}, {z}, {u}, {v}, {r}, {g}, {b}, {a}")
}

#[must_use]
fn c_vertex(vertex: &DisplayVertex) -> String {
    let [x, y, z] = vertex.position;
    let [u, v] = vertex.texture_coordinate;
    let [r, g, b, a] = vertex.shade.map(|channel| channel as u8);
    format!("    {{{{{{{x}, {y}, {z}}}, 0, {{{u}, {v}}}, {{0x{r:02X}, 0x{g:02X}, 0x{b:02X}, 0x{a:02X}}}}}}},")
}

/// Loadable vertex data, one labelled block per buffer slot.
#[must_use]
pub fn write_vertex_buffers(asset: &str, buffers: &[VertexBuffer], format: ExportFormat) -> String {
    let mut text = String::new();
    for buffer in buffers {
        let label = vertex_buffer_label(asset, buffer.slot());
        match format {
            ExportFormat::Assembly => {
                let _ = writeln!(text, "glabel {label}");
                for vertex in buffer.vertices() {
                    let _ = writeln!(text, "{}", assembly_vertex(vertex));
                }
            }
            ExportFormat::C => {
                let _ = writeln!(text, "static Vtx {label}[{}] = {{", buffer.vertices().len());
                for vertex in buffer.vertices() {
                    let _ = writeln!(text, "{}", c_vertex(vertex));
                }
                let _ = writeln!(text, "}};");
            }
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::vertex_buffer::pack_vertex_buffers;
    use crate::display_list::vertex_buffer::tests::make_triangle;
    use crate::geometry::fixed_point::normal_shade;
    use cgmath::Vector3;

    #[test]
    fn test_assembly_blocks_per_slot() {
        let buffers = pack_vertex_buffers(vec![make_triangle(0, 1, 0), make_triangle(0, 1, 10)], 3);

        let actual = write_vertex_buffers("castle", &buffers, ExportFormat::Assembly);

        let expected = "glabel castle_vertex_0\n\
vertex 0, 0, 0, 0, 0, 255, 255, 255, 255\n\
vertex 1, 0, 0, 0, 0, 255, 255, 255, 255\n\
vertex 2, 0, 0, 0, 0, 255, 255, 255, 255\n\
\n\
glabel castle_vertex_1\n\
vertex 10, 0, 0, 0, 0, 255, 255, 255, 255\n\
vertex 11, 0, 0, 0, 0, 255, 255, 255, 255\n\
vertex 12, 0, 0, 0, 0, 255, 255, 255, 255\n\
\n";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_c_array_prints_shade_as_bytes() {
        let mut triangle = make_triangle(0, 1, -3);
        triangle.corners[0].shade = normal_shade(Vector3::new(0.0, -1.0, 0.0));
        triangle.corners[0].texture_coordinate = [1024, -512];
        let buffers = pack_vertex_buffers(vec![triangle], 15);

        let actual = write_vertex_buffers("castle", &buffers, ExportFormat::C);

        let lines: Vec<&str> = actual.lines().collect();
        assert_eq!(lines[0], "static Vtx castle_vertex_0[3] = {");
        assert_eq!(lines[1], "    {{{-3, 0, 0}, 0, {1024, -512}, {0x00, 0x81, 0x00, 0xFF}}},");
        assert_eq!(lines[2], "    {{{-2, 0, 0}, 0, {0, 0}, {0xFF, 0xFF, 0xFF, 0xFF}}},");
        assert_eq!(lines[4], "};");
    }

    #[test]
    fn test_no_buffers_no_text() {
        assert!(write_vertex_buffers("castle", &[], ExportFormat::C).is_empty());
    }
}
