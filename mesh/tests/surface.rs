use std::collections::HashMap;

use mask::{Dims, Orientation, VoxelMask, WORD_BITS};
use mesh::{extract_surface, from_cube_locations, ObjExport, Vertex};
use proptest::prelude::*;

fn single_voxel() -> VoxelMask {
    let dims = Dims::new(16, 3, 3).unwrap();
    VoxelMask::from_fn(dims, |x, y, z| (x, y, z) == (1, 1, 1))
}

#[test]
fn single_voxel_has_one_face_per_orientation() {
    let mesh = extract_surface(&single_voxel()).unwrap();
    assert_eq!(mesh.len(), 6);
    for o in Orientation::ALL {
        assert_eq!(
            mesh.faces().iter().filter(|f| f.orientation == o).count(),
            1,
            "{o:?}"
        );
    }
}

#[test]
fn single_voxel_faces_sit_on_its_corners() {
    let mesh = extract_surface(&single_voxel()).unwrap();
    let in_cube = |v: &Vertex| [v.x, v.y, v.z].iter().all(|c| (1..=2).contains(c));
    for face in mesh.faces() {
        assert!(face.vertices.iter().all(in_cube), "{face:?}");
    }
    assert_eq!(ObjExport::from_mesh(&mesh).vertices.len(), 8);
}

#[test]
fn adjacent_voxels_share_no_face() {
    let dims = Dims::new(16, 3, 3).unwrap();
    let solid = VoxelMask::from_fn(dims, |x, y, z| (x == 1 || x == 2) && y == 1 && z == 1);
    let mesh = extract_surface(&solid).unwrap();
    assert_eq!(mesh.len(), 10);

    // the shared face lies in the plane x = 2
    let on_shared_plane = mesh
        .faces()
        .iter()
        .filter(|f| f.vertices.iter().all(|v| v.x == 2))
        .count();
    assert_eq!(on_shared_plane, 0);

    let export = ObjExport::from_mesh(&mesh);
    assert_eq!(export.vertices.len(), 12);
    let mut seen = export.vertices.clone();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), export.vertices.len());
}

#[test]
fn naive_mesh_keeps_interior_faces() {
    let dims = Dims::new(16, 3, 3).unwrap();
    let solid = VoxelMask::from_fn(dims, |x, y, z| (x == 1 || x == 2) && y == 1 && z == 1);
    let naive = from_cube_locations(&solid);
    assert_eq!(naive.len(), 12);
    let on_shared_plane = naive
        .faces()
        .iter()
        .filter(|f| f.vertices.iter().all(|v| v.x == 2))
        .count();
    assert_eq!(on_shared_plane, 2);
}

fn mask_strategy() -> impl Strategy<Value = VoxelMask> {
    (1usize..=2, 1usize..=4, 1usize..=4).prop_flat_map(|(wx, y, z)| {
        let dims = Dims::new(wx * WORD_BITS, y, z).unwrap();
        prop::collection::vec(any::<u16>(), dims.word_count())
            .prop_map(move |words| VoxelMask::new(dims, words).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_surface_is_closed(mask in mask_strategy()) {
        // Every directed edge is matched by its reverse on a neighboring face.
        let mesh = extract_surface(&mask).unwrap();
        let mut balance: HashMap<(Vertex, Vertex), i32> = HashMap::new();
        for face in mesh.faces() {
            let v = face.vertices;
            for i in 0..4 {
                let (a, b) = (v[i], v[(i + 1) % 4]);
                if a < b {
                    *balance.entry((a, b)).or_default() += 1;
                } else {
                    *balance.entry((b, a)).or_default() -= 1;
                }
            }
        }
        prop_assert!(balance.values().all(|n| *n == 0));
    }

    #[test]
    fn prop_faces_face_empty_neighbors(mask in mask_strategy()) {
        let dims = mask.dims();
        let mesh = extract_surface(&mask).unwrap();
        for face in mesh.faces() {
            let [nx, ny, nz] = face.orientation.normal();
            // recover the voxel from the face's minimum corner
            let min = face.vertices.iter().copied().min().unwrap();
            let (mut x, mut y, mut z) = (min.x, min.y, min.z);
            match face.orientation {
                Orientation::PosX => x -= 1,
                Orientation::PosY => y -= 1,
                Orientation::PosZ => z -= 1,
                _ => {}
            }
            prop_assert!(mask.get_boolean(x as usize, y as usize, z as usize).unwrap());
            let (ax, ay, az) = (x + nx, y + ny, z + nz);
            let neighbor_solid = ax >= 0
                && ay >= 0
                && az >= 0
                && dims.contains(ax as usize, ay as usize, az as usize)
                && mask.get_boolean(ax as usize, ay as usize, az as usize).unwrap();
            prop_assert!(!neighbor_solid);
        }
    }

    #[test]
    fn prop_surface_is_subset_of_naive(mask in mask_strategy()) {
        let surface = extract_surface(&mask).unwrap();
        let naive = from_cube_locations(&mask);
        prop_assert_eq!(naive.len(), 6 * mask.count_ones());
        prop_assert!(surface.len() <= naive.len());
        for face in surface.faces() {
            prop_assert!(naive.faces().contains(face));
        }
    }
}
