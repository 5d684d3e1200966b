#![no_main]

use libfuzzer_sys::fuzz_target;
use mask::{BoundaryPolicy, Dims, Orientation, VoxelMask};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let dims = Dims::new(
        16 * (1 + usize::from(data[0] % 3)),
        1 + usize::from(data[1] % 5),
        1 + usize::from(data[2] % 5),
    )
    .expect("aligned dims");
    let words: Vec<u16> = data[3..]
        .chunks(2)
        .map(|c| u16::from_be_bytes([c[0], *c.get(1).unwrap_or(&0)]))
        .chain(std::iter::repeat(0))
        .take(dims.word_count())
        .collect();
    let mask = VoxelMask::new(dims, words).expect("sized words");

    for orientation in Orientation::ALL {
        let there = mask.shift(orientation, BoundaryPolicy::FillFalse);
        let back = there.shift(orientation.opposite(), BoundaryPolicy::FillFalse);
        // A round trip can only lose voxels that fell off the grid.
        let lost = back.and(&mask.negate()).expect("same dims");
        assert!(!lost.any());
        assert_eq!(
            mask.negate().shift(orientation, BoundaryPolicy::FillTrue),
            there.negate()
        );
    }
});
