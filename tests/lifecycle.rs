use dmx::{Matrix, MatrixError};
use pretty_assertions::assert_eq;

mod shared;
use self::shared::util::{init_logger, matrix, random_dims, random_matrix};

#[test]
fn constructed_shapes_hold_their_invariant() {
    init_logger();
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let dims = random_dims(&mut rng, 8);
        let m = Matrix::zeros(dims).unwrap();
        assert_eq!(m.dims(), dims);
        assert_eq!(m.row_major_data().len(), dims.0 * dims.1);
        assert_eq!(m.rows().count(), dims.0);
    }

    let m = Matrix::new();
    assert_eq!((m.num_rows(), m.num_cols()), (1, 1));
}

#[test]
fn copies_are_independent() {
    init_logger();
    let mut rng = rand::thread_rng();

    let a = random_matrix(&mut rng, (3, 4));
    let mut b = a.clone();
    assert!(b.equals(&a).unwrap());

    let before = a.row_major_data().to_vec();
    for x in b.row_major_data_mut() {
        *x += 1.0;
    }
    *b.at(2, 3).unwrap() = 42.0;
    b.set_rows(1).unwrap();

    assert_eq!(a.row_major_data(), &before[..]);
    assert_eq!(a.dims(), (3, 4));
}

#[test]
fn transfer_leaves_an_empty_source() {
    init_logger();
    let mut a = matrix(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let b = a.take();

    assert_eq!((a.num_rows(), a.num_cols()), (0, 0));
    assert_eq!(b.row_major_data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(a.equals(&b), Err(MatrixError::EmptyMatrix));

    // taking again is harmless, and the husk can be reassigned
    let c = a.take();
    assert!(c.is_empty());
    a = b.clone();
    assert_eq!(a, b);

    let mut d = Matrix::new();
    d.transfer_from(&mut a);
    assert_eq!(d, b);
    assert!(a.is_empty());
}

#[test]
fn resize_preserves_overlap() {
    init_logger();
    let original = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);

    let mut taller = original.clone();
    taller.set_rows(3).unwrap();
    assert_eq!(taller, matrix(&[&[1.0, 2.0], &[3.0, 4.0], &[0.0, 0.0]]));

    let mut narrower = original.clone();
    narrower.set_cols(1).unwrap();
    assert_eq!(narrower, matrix(&[&[1.0], &[3.0]]));
}

#[test]
fn random_resizes_preserve_overlap() {
    init_logger();
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let dims = random_dims(&mut rng, 6);
        let a = random_matrix(&mut rng, dims);
        let (rows, cols) = random_dims(&mut rng, 6);

        let mut b = a.clone();
        b.set_rows(rows).unwrap();
        b.set_cols(cols).unwrap();
        assert_eq!(b.dims(), (rows, cols));

        for r in 0..rows {
            for c in 0..cols {
                let expected = match r < a.num_rows() && c < a.num_cols() {
                    true => a[(r, c)],
                    false => 0.0,
                };
                assert_eq!(b[(r, c)], expected);
            }
        }
    }
}

#[test]
fn bad_resize_is_rejected_without_side_effects() {
    init_logger();
    let mut a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(a.set_rows(0), Err(MatrixError::InvalidDimension { rows: 0, cols: 2 }));
    assert_eq!(a, matrix(&[&[1.0, 2.0], &[3.0, 4.0]]));
}

#[test]
fn bounds_checking() {
    init_logger();
    let mut a = Matrix::zeros((2, 2)).unwrap();
    assert_eq!(
        a.at(2, 0).unwrap_err(),
        MatrixError::IndexOutOfRange { index: (2, 0), dims: (2, 2) },
    );
    assert!(a.at(1, 1).is_ok());
}
