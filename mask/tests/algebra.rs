use mask::{Dims, VoxelMask, WORD_BITS};
use proptest::prelude::*;

fn dims_strategy() -> impl Strategy<Value = Dims> {
    (1usize..=3, 1usize..=4, 1usize..=4)
        .prop_map(|(wx, y, z)| Dims::new(wx * WORD_BITS, y, z).unwrap())
}

fn masks(n: usize) -> impl Strategy<Value = Vec<VoxelMask>> {
    dims_strategy().prop_flat_map(move |dims| {
        prop::collection::vec(
            prop::collection::vec(any::<u16>(), dims.word_count())
                .prop_map(move |words| VoxelMask::new(dims, words).unwrap()),
            n,
        )
    })
}

proptest! {
    #[test]
    fn prop_commutative(ms in masks(2)) {
        let (a, b) = (&ms[0], &ms[1]);
        prop_assert_eq!(a.and(b).unwrap(), b.and(a).unwrap());
        prop_assert_eq!(a.or(b).unwrap(), b.or(a).unwrap());
        prop_assert_eq!(a.xor(b).unwrap(), b.xor(a).unwrap());
    }

    #[test]
    fn prop_associative(ms in masks(3)) {
        let (a, b, c) = (&ms[0], &ms[1], &ms[2]);
        prop_assert_eq!(
            a.and(b).unwrap().and(c).unwrap(),
            a.and(&b.and(c).unwrap()).unwrap()
        );
        prop_assert_eq!(
            a.or(b).unwrap().or(c).unwrap(),
            a.or(&b.or(c).unwrap()).unwrap()
        );
        prop_assert_eq!(
            a.xor(b).unwrap().xor(c).unwrap(),
            a.xor(&b.xor(c).unwrap()).unwrap()
        );
    }

    #[test]
    fn prop_iff_self_is_all_true(ms in masks(1)) {
        prop_assert!(ms[0].iff(&ms[0]).unwrap().all());
    }

    #[test]
    fn prop_and_negation_is_all_false(ms in masks(1)) {
        prop_assert!(!ms[0].and(&ms[0].negate()).unwrap().any());
    }

    #[test]
    fn prop_double_negation(ms in masks(1)) {
        prop_assert_eq!(ms[0].negate().negate(), ms[0].clone());
    }

    #[test]
    fn prop_nand_is_negated_and(ms in masks(2)) {
        let (a, b) = (&ms[0], &ms[1]);
        prop_assert_eq!(a.nand(b).unwrap(), a.and(b).unwrap().negate());
    }

    #[test]
    fn prop_bytes_roundtrip(ms in masks(1)) {
        let m = &ms[0];
        let back = VoxelMask::from_be_bytes(m.dims(), &m.to_be_bytes()).unwrap();
        prop_assert_eq!(&back, m);
    }

    #[test]
    fn prop_enumeration_matches_lookup(ms in masks(1)) {
        let m = &ms[0];
        let coords = m.true_flag_coordinates();
        prop_assert_eq!(coords.len(), m.count_ones());
        for (x, y, z) in &coords {
            prop_assert!(m.get_boolean(*x, *y, *z).unwrap());
        }
        let indices = m.true_flag_indices();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn word_pattern_addresses_first_voxel() {
    let dims = Dims::new(16, 1, 1).unwrap();
    let m = VoxelMask::new(dims, vec![0x8000]).unwrap();
    assert!(m.get_boolean(0, 0, 0).unwrap());
    assert_eq!(m.true_flag_coordinates(), vec![(0, 0, 0)]);
}
