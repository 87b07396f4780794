use crate::conversion::context::ConversionContext;
use crate::scene::scene_graph::{Mesh, Node, Scene};

pub(crate) fn inspect_node(node: &Node, scene: &Scene, context: &mut ConversionContext) {
    for &mesh in node.meshes() {
        let mesh = scene.mesh(mesh);
        context.register_mesh(mesh.material(), mesh.face_count());
    }

    for child in node.children() {
        inspect_node(child, scene, context);
    }
}

/// Own meshes first, then children in declaration order.
pub(crate) fn visit_meshes<'scene>(node: &'scene Node, scene: &'scene Scene, visitor: &mut impl FnMut(&'scene Mesh)) {
    for &mesh in node.meshes() {
        visitor(scene.mesh(mesh));
    }

    for child in node.children() {
        visit_meshes(child, scene, visitor);
    }
}
