use connect_four::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u128>::try_new(10);
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u64>::try_new(9);
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { size: 9, capacity: 64 })));
}

#[test]
fn test_get_set_and_bounds() {
    let mut bb = BitBoard::<u128>::try_new(5).unwrap();
    assert!(bb.is_empty());

    bb.set(4, 0).unwrap();
    assert!(bb.get(4, 0).unwrap());
    assert!(!bb.get(0, 4).unwrap());
    assert_eq!(
        bb.set(5, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 5, col: 0 }
    );
}

#[test]
fn test_contains_is_false_off_board() {
    let bb = BitBoard::<u128>::from_iter(5, [(0, 0), (4, 4)]).unwrap();
    assert!(bb.contains(0, 0));
    assert!(bb.contains(4, 4));
    assert!(!bb.contains(-1, 0));
    assert!(!bb.contains(0, -1));
    assert!(!bb.contains(5, 4));
    assert!(!bb.contains(4, 5));
}

#[test]
fn test_full_board_uses_whole_capacity() {
    // 8x8 fills a u64 exactly, so the mask must not overflow.
    let cells = (0..8).flat_map(|r| (0..8).map(move |c| (r, c)));
    let bb = BitBoard::<u64>::from_iter(8, cells).unwrap();
    assert!(bb.is_full());
    assert_eq!(bb.count_ones(), 64);
}

#[test]
fn test_from_iter_and_iter() {
    let bb = BitBoard::<u128>::from_iter(6, [(0, 1), (5, 5)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (5, 5)]);
}

#[test]
fn test_and_or() {
    let a = BitBoard::<u128>::from_iter(5, [(0, 0), (1, 1)]).unwrap();
    let b = BitBoard::<u128>::from_iter(5, [(1, 1), (2, 2)]).unwrap();
    assert_eq!((a & b).iter_set_bits().collect::<Vec<_>>(), vec![(1, 1)]);
    assert_eq!((a | b).count_ones(), 3);
}
