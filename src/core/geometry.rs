use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use smallvec::SmallVec;

/// Indexed line-list mesh: every pair in `indices` is one edge.
#[derive(Clone, Debug, Default)]
pub struct WireframeMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
    pub face_count: usize,
}

impl WireframeMesh {
    pub fn edge_count(&self) -> usize {
        self.indices.len() / 2
    }
}

const ICO_FACES: [[u16; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn ico_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

// A lattice point identified by its integer barycentric weights over the
// base corners. Points on shared edges/corners get the same key from every
// face, which makes de-duplication exact.
type LatticeKey = SmallVec<[(u16, u32); 3]>;

fn lattice_key(corners: [u16; 3], weights: [u32; 3]) -> LatticeKey {
    let mut key: LatticeKey = corners
        .iter()
        .zip(weights.iter())
        .filter(|(_, w)| **w > 0)
        .map(|(c, w)| (*c, *w))
        .collect();
    key.sort_unstable();
    key
}

/// Geodesic icosahedron wireframe: each base face is split into
/// `(detail + 1)^2` triangles and every vertex projected onto the sphere.
pub fn icosahedron(radius: f32, detail: u32) -> WireframeMesh {
    let base = ico_corners();
    let cols = detail + 1;

    let mut lookup: FnvHashMap<LatticeKey, u16> = FnvHashMap::default();
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut edges: FnvHashSet<(u16, u16)> = FnvHashSet::default();
    let mut face_count = 0usize;

    for face in ICO_FACES.iter() {
        let [a, b, c] = *face;
        let mut vertex = |i: u32, j: u32| -> u16 {
            // row i walks from edge ab toward corner c; j walks a -> b
            let rows = cols - i;
            let weights = [rows - j, j, i];
            let key = lattice_key([a, b, c], weights);
            *lookup.entry(key).or_insert_with(|| {
                let p = (base[a as usize] * weights[0] as f32
                    + base[b as usize] * weights[1] as f32
                    + base[c as usize] * weights[2] as f32)
                    / cols as f32;
                positions.push((p.normalize() * radius).to_array());
                (positions.len() - 1) as u16
            })
        };

        let mut grid: Vec<Vec<u16>> = Vec::with_capacity(cols as usize + 1);
        for i in 0..=cols {
            let rows = cols - i;
            grid.push((0..=rows).map(|j| vertex(i, j)).collect());
        }

        for i in 0..cols as usize {
            let span = 2 * (cols as usize - i) - 1;
            for j in 0..span {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                face_count += 1;
                for (p, q) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                    edges.insert((p.min(q), p.max(q)));
                }
            }
        }
    }

    let mut edge_list: Vec<(u16, u16)> = edges.into_iter().collect();
    edge_list.sort_unstable();
    let indices = edge_list.into_iter().flat_map(|(p, q)| [p, q]).collect();

    WireframeMesh {
        positions,
        indices,
        face_count,
    }
}

/// sRGB `0xRRGGBB` to linear RGB, matching how hex material colors are
/// interpreted before lighting.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xFF) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
