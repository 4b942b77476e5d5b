//! Desk scene construction.
//!
//! Builds the node hierarchy the interaction layer raycasts against. Only
//! proxy colliders live here; visual geometry belongs to the renderer. The
//! `interact_` name prefix tags the clickable groups, and their child meshes
//! stay untagged so hits resolve upward to the group.

use glam::{Quat, Vec3};
use room_core::scene::{Collider, Transform};
use room_core::{NodeId, SceneGraph};

fn at(x: f32, y: f32, z: f32) -> Transform {
    Transform::from_translation(Vec3::new(x, y, z))
}

/// A thin horizontal quad (two triangles) in local space, for the paper
/// notes lying flat on the desk.
fn flat_quad(half_w: f32, half_d: f32) -> Collider {
    let a = Vec3::new(-half_w, 0.0, -half_d);
    let b = Vec3::new(half_w, 0.0, -half_d);
    let c = Vec3::new(half_w, 0.0, half_d);
    let d = Vec3::new(-half_w, 0.0, half_d);
    Collider::Mesh(vec![[a, b, c], [a, c, d]])
}

/// Populate `scene` with the desk setup and return the raycast target set:
/// the five interactive groups plus the desk surface, which occludes objects
/// behind it without being interactive itself.
pub fn build_desk_scene(scene: &mut SceneGraph) -> Vec<NodeId> {
    let room = scene.insert("room", None, Transform::default(), None);

    let desk = scene.insert(
        "desk",
        Some(room),
        at(0.0, -0.05, 0.0),
        Some(Collider::Aabb {
            half_extents: Vec3::new(1.2, 0.04, 0.8),
        }),
    );

    let phone = scene.insert("interact_handphone", Some(room), at(0.8, 0.05, 0.3), None);
    scene.insert(
        "handphone_body",
        Some(phone),
        Transform {
            rotation: Quat::from_rotation_y(-0.4),
            ..Transform::default()
        },
        Some(Collider::Aabb {
            half_extents: Vec3::new(0.08, 0.01, 0.16),
        }),
    );

    let book = scene.insert("interact_book", Some(room), at(-0.4, 0.08, 0.2), None);
    scene.insert(
        "book_cover",
        Some(book),
        Transform::default(),
        Some(Collider::Aabb {
            half_extents: Vec3::new(0.18, 0.03, 0.13),
        }),
    );

    let note_todo = scene.insert("interact_notetodo", Some(room), at(0.2, 0.02, 0.5), None);
    scene.insert(
        "notetodo_paper",
        Some(note_todo),
        Transform::default(),
        Some(flat_quad(0.1, 0.14)),
    );

    let note_routine = scene.insert(
        "interact_noteroutine",
        Some(room),
        at(-0.1, 0.02, 0.6),
        None,
    );
    scene.insert(
        "noteroutine_paper",
        Some(note_routine),
        Transform {
            rotation: Quat::from_rotation_y(0.25),
            ..Transform::default()
        },
        Some(flat_quad(0.1, 0.14)),
    );

    let watch = scene.insert(
        "interact_digitalwatch",
        Some(room),
        at(0.55, 0.06, -0.2),
        None,
    );
    scene.insert(
        "digitalwatch_face",
        Some(watch),
        Transform::default(),
        Some(Collider::Sphere { radius: 0.07 }),
    );

    vec![phone, book, note_todo, note_routine, watch, desk]
}
