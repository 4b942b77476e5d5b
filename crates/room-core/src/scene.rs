//! Arena-indexed scene graph.
//!
//! Nodes are stored in a flat table and referred to by `NodeId` indices, so
//! the interaction layer never holds live pointers into the renderer's own
//! object graph. The table is append-only for the session; removal is a
//! `detach` flag that every lookup treats as "gone", which is what lets
//! hover resolution fail safe when geometry disappears between frames.

use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

use crate::constants::INTERACT_PREFIX;
use crate::ray::{self, Hit, Ray};

/// Semantic click target, the closed set of modals the scene can open.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ActionKey {
    Phone,
    Book,
    Todo,
    Routine,
    Watch,
}

impl ActionKey {
    /// Parse the suffix of an `interact_*` node name. Accepts the modeled
    /// object names and their short forms; anything else is no key, which
    /// leaves the object hoverable but not clickable.
    pub fn parse(suffix: &str) -> Option<Self> {
        match suffix {
            "handphone" | "phone" => Some(Self::Phone),
            "book" => Some(Self::Book),
            "notetodo" | "todo" => Some(Self::Todo),
            "noteroutine" | "routine" => Some(Self::Routine),
            "digitalwatch" | "watch" => Some(Self::Watch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Book => "book",
            Self::Todo => "todo",
            Self::Routine => "routine",
            Self::Watch => "watch",
        }
    }
}

/// Visual feedback kind an interactive node requests on hover. Only scale
/// feedback exists today; an unknown kind degrades to non-interactive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HoverEffect {
    Scale,
}

/// Handle into the node table. Copyable, hashable, never dangles (slots are
/// not reused).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Local TRS transform relative to the parent node.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Hit-testing shape attached to a node, expressed in the node's local space.
#[derive(Clone, Debug)]
pub enum Collider {
    Sphere { radius: f32 },
    Aabb { half_extents: Vec3 },
    Mesh(Vec<[Vec3; 3]>),
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    local: Transform,
    collider: Option<Collider>,
    hover: Option<HoverEffect>,
    action: Option<ActionKey>,
    detached: bool,
}

#[derive(Default, Debug)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. A name starting with the `interact_` prefix tags the
    /// node for hover feedback and derives its action key from the suffix,
    /// mirroring how the loaded model names its clickable objects.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        local: Transform,
        collider: Option<Collider>,
    ) -> NodeId {
        let name = name.into();
        let (hover, action) = match name.strip_prefix(INTERACT_PREFIX) {
            Some(suffix) => (Some(HoverEffect::Scale), ActionKey::parse(suffix)),
            None => (None, None),
        };
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name,
            parent,
            children: SmallVec::new(),
            local,
            collider,
            hover,
            action,
            detached: false,
        });
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the node is still part of the scene.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.index())
            .map(|n| !n.detached)
            .unwrap_or(false)
    }

    /// Mark a node and its whole subtree as removed. Slots stay allocated;
    /// every subsequent lookup on them reports "gone".
    pub fn detach(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let node = &mut self.nodes[next.index()];
            node.detached = true;
            stack.extend(node.children.iter().copied());
        }
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn action(&self, id: NodeId) -> Option<ActionKey> {
        let node = self.nodes.get(id.index())?;
        if node.detached {
            return None;
        }
        node.action
    }

    pub fn hover_effect(&self, id: NodeId) -> Option<HoverEffect> {
        let node = self.nodes.get(id.index())?;
        if node.detached {
            return None;
        }
        node.hover
    }

    pub fn local_scale(&self, id: NodeId) -> Vec3 {
        self.nodes[id.index()].local.scale
    }

    pub fn set_local_scale(&mut self, id: NodeId, scale: Vec3) {
        self.nodes[id.index()].local.scale = scale;
    }

    /// Composed local-to-world matrix, walking the parent chain.
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let node = &self.nodes[id.index()];
        let local = node.local.matrix();
        match node.parent {
            Some(p) => self.world_transform(p) * local,
            None => local,
        }
    }

    /// Walk from `id` up the ancestor chain to the nearest node tagged for
    /// hover feedback. Reaching a root with no tag is the ordinary "not
    /// interactive" case; a detached node anywhere on the chain fails safe
    /// the same way.
    pub fn resolve_interactive(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.nodes.get(current.index())?;
            if node.detached {
                return None;
            }
            if node.hover == Some(HoverEffect::Scale) {
                return Some(current);
            }
            cursor = node.parent;
        }
        None
    }

    /// Cast a ray against the subtrees rooted at `targets`, nearest hit
    /// first. Pure with respect to the scene; ties resolve by strict
    /// distance comparison.
    pub fn raycast(&self, ray: &Ray, targets: &[NodeId]) -> Vec<Hit> {
        let mut hits = Vec::new();
        let mut stack: Vec<NodeId> = targets.to_vec();
        while let Some(id) = stack.pop() {
            let node = match self.nodes.get(id.index()) {
                Some(n) if !n.detached => n,
                _ => continue,
            };
            if node.collider.is_some() {
                if let Some(distance) = self.test_collider(ray, id) {
                    hits.push(Hit { node: id, distance });
                }
            }
            stack.extend(node.children.iter().copied());
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn test_collider(&self, ray: &Ray, id: NodeId) -> Option<f32> {
        let world = self.world_transform(id);
        match self.nodes[id.index()].collider.as_ref()? {
            Collider::Sphere { radius } => {
                let center = world.transform_point3(Vec3::ZERO);
                // Non-uniform scale approximated by the largest axis.
                let sx = world.x_axis.truncate().length();
                let sy = world.y_axis.truncate().length();
                let sz = world.z_axis.truncate().length();
                let world_radius = radius * sx.max(sy).max(sz);
                ray::ray_sphere(ray.origin, ray.dir, center, world_radius)
            }
            Collider::Aabb { half_extents } => {
                let (min, max) = world_aabb(&world, *half_extents);
                ray::ray_aabb(ray, min, max)
            }
            Collider::Mesh(triangles) => {
                let mut best: Option<f32> = None;
                for tri in triangles {
                    let v0 = world.transform_point3(tri[0]);
                    let v1 = world.transform_point3(tri[1]);
                    let v2 = world.transform_point3(tri[2]);
                    if let Some(t) = ray::ray_triangle(ray, v0, v1, v2) {
                        if best.map(|b| t < b).unwrap_or(true) {
                            best = Some(t);
                        }
                    }
                }
                best
            }
        }
    }
}

/// Refit a local box (centered, given half extents) into a world-space AABB
/// by transforming its eight corners.
fn world_aabb(world: &Mat4, half_extents: Vec3) -> (Vec3, Vec3) {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for ix in [-1.0f32, 1.0] {
        for iy in [-1.0f32, 1.0] {
            for iz in [-1.0f32, 1.0] {
                let corner =
                    world.transform_point3(half_extents * Vec3::new(ix, iy, iz));
                min = min.min(corner);
                max = max.max(corner);
            }
        }
    }
    (min, max)
}
