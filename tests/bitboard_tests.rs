use trellis_console::{BitBoard, BitBoardError};

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());

    bb.set(9, 9).unwrap();
    assert_eq!(bb.count_ones(), 2);

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert!(bb.get(0, 4).is_err());
}

#[test]
fn test_iter_and_overlap() {
    let mut a = BitBoard::<u128, 10>::new();
    let mut b = BitBoard::<u128, 10>::new();
    a.set(0, 1).unwrap();
    a.set(3, 3).unwrap();
    b.set(3, 3).unwrap();

    let bits: Vec<_> = a.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);

    let both = a & b;
    assert_eq!(both.iter_set_bits().collect::<Vec<_>>(), vec![(3, 3)]);

    b.set(7, 2).unwrap();
    a |= b;
    assert_eq!(a.count_ones(), 3);
    assert_eq!((a | b).count_ones(), 3);
}
