//! Static tutorial geometry and vertex projection.
//!
//! The tutorials draw four fixed meshes:
//!
//! | kind               | vertices | attributes          | indexed |
//! |--------------------|----------|---------------------|---------|
//! | `triangle`         | 3        | position            | no      |
//! | `colored-triangle` | 3        | position, color     | no      |
//! | `cube`             | 8        | position, color     | 36      |
//! | `textured-cube`    | 24       | position, texcoord  | 36      |
//!
//! [`Mesh::project`] pushes the vertices through a combined transform and
//! reports clip-space and NDC positions, which is what the vertex shader
//! would hand to the rasterizer.

use gltut_math::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which built-in mesh to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeshKind {
    /// Flat 2D triangle at `z = 0`.
    Triangle,
    /// The flat triangle with per-vertex colors.
    ColoredTriangle,
    /// 8-vertex colored cube.
    #[default]
    Cube,
    /// 24-vertex cube with per-face texture coordinates.
    TexturedCube,
}

impl MeshKind {
    /// All kinds, in tutorial order.
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Triangle,
        MeshKind::ColoredTriangle,
        MeshKind::Cube,
        MeshKind::TexturedCube,
    ];

    /// Config/CLI name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::ColoredTriangle => "colored-triangle",
            Self::Cube => "cube",
            Self::TexturedCube => "textured-cube",
        }
    }

    /// Builds the mesh data.
    pub fn build(self) -> Mesh {
        match self {
            Self::Triangle => Mesh::triangle(),
            Self::ColoredTriangle => Mesh::colored_triangle(),
            Self::Cube => Mesh::cube(),
            Self::TexturedCube => Mesh::textured_cube(),
        }
    }
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MeshKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown mesh '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Vertex attributes plus an optional index list.
///
/// Attribute vectors are either empty or have one entry per position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Object-space positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex RGB colors.
    pub colors: Vec<Vec3>,
    /// Per-vertex UV coordinates.
    pub texcoords: Vec<[f32; 2]>,
    /// Triangle list indices; empty for non-indexed meshes.
    pub indices: Vec<u16>,
}

const TRIANGLE_2D: [[f32; 2]; 3] = [[0.0, 0.8], [-0.8, -0.8], [0.8, -0.8]];

const CUBE_CORNERS: [[f32; 3]; 8] = [
    // front
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    // back
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

const CUBE_CORNER_INDICES: [u16; 36] = [
    0, 1, 2, 2, 3, 0, // front
    1, 5, 6, 6, 2, 1, // right
    7, 6, 5, 5, 4, 7, // back
    4, 0, 3, 3, 7, 4, // left
    4, 5, 1, 1, 0, 4, // bottom
    3, 2, 6, 6, 7, 3, // top
];

const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    // front
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // top
    [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    // back
    [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
    // bottom
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    // left
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    // right
    [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
];

const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

impl Mesh {
    /// The 2D triangle of the first tutorials, placed at `z = 0`.
    pub fn triangle() -> Self {
        Self {
            positions: TRIANGLE_2D.iter().map(|p| Vec3::new(p[0], p[1], 0.0)).collect(),
            ..Self::default()
        }
    }

    /// The triangle with yellow, blue and red corners.
    pub fn colored_triangle() -> Self {
        Self {
            colors: vec![
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
            ..Self::triangle()
        }
    }

    /// Colored cube spanning `[-1, 1]^3`, sharing corners between faces.
    pub fn cube() -> Self {
        let palette = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        Self {
            positions: CUBE_CORNERS.iter().map(|&p| Vec3::from(p)).collect(),
            colors: palette.iter().chain(palette.iter()).copied().collect(),
            texcoords: Vec::new(),
            indices: CUBE_CORNER_INDICES.to_vec(),
        }
    }

    /// Cube with four vertices per face so each face gets the full texture.
    pub fn textured_cube() -> Self {
        let positions = CUBE_FACES.iter().flatten().map(|&p| Vec3::from(p)).collect();
        let texcoords = (0..CUBE_FACES.len()).flat_map(|_| FACE_UVS).collect();
        let indices = (0..CUBE_FACES.len() as u16)
            .flat_map(|face| {
                let b = face * 4;
                [b, b + 1, b + 2, b + 2, b + 3, b]
            })
            .collect();

        Self {
            positions,
            colors: Vec::new(),
            texcoords,
            indices,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles drawn.
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.positions.len() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Triangles as vertex index triples.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        if self.indices.is_empty() {
            (0..self.triangle_count())
                .map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
                .collect()
        } else {
            self.indices
                .chunks_exact(3)
                .map(|c| [c[0] as usize, c[1] as usize, c[2] as usize])
                .collect()
        }
    }

    /// Object-space bounding box as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (
                Vec3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vec3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }

    /// Transforms every vertex by `mvp`.
    pub fn project(&self, mvp: &Mat4) -> Vec<ProjectedVertex> {
        trace!(vertices = self.positions.len(), "mesh::project");
        let projected: Vec<ProjectedVertex> = self
            .positions
            .iter()
            .enumerate()
            .map(|(index, &p)| {
                let clip = mvp.transform(p.extend(1.0));
                ProjectedVertex {
                    index,
                    clip,
                    ndc: clip.perspective_divide(),
                }
            })
            .collect();
        debug!(
            vertices = projected.len(),
            visible = projected.iter().filter(|v| v.is_visible()).count(),
            "Projected mesh"
        );
        projected
    }
}

/// One vertex after the model/view/projection transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedVertex {
    /// Vertex index in the mesh.
    pub index: usize,
    /// Clip-space position.
    pub clip: Vec4,
    /// Normalized device coordinates, `None` when `clip.w == 0`.
    pub ndc: Option<Vec3>,
}

impl ProjectedVertex {
    /// Inside the clip volume: `w > 0` and every NDC component in `[-1, 1]`.
    pub fn is_visible(&self) -> bool {
        if self.clip.w <= 0.0 {
            return false;
        }
        match self.ndc {
            Some(n) => [n.x, n.y, n.z].iter().all(|c| (-1.0..=1.0).contains(c)),
            None => false,
        }
    }
}
