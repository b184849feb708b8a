use std::collections::HashSet;

use itertools::Itertools;

use crate::shuffle::{n_shuffles, riffle_shuffles, validate_composition, ShuffleError};

/// Parity of the number of inversions between packet labels of a shuffled axis list.
fn inversion_sign(shuffled_axes: &[usize], packet_of: impl Fn(usize) -> usize) -> i8 {
    let inversions = shuffled_axes
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| packet_of(a) > packet_of(b))
        .count();
    if inversions % 2 == 0 {
        1
    } else {
        -1
    }
}

#[test]
fn test_shuffle_invalid_composition() {
    assert_eq!(
        validate_composition(&[1, 2], 4),
        Err(ShuffleError::InvalidComposition {
            composition: vec![1, 2],
            naxes: 4
        })
    );
    assert!(validate_composition(&[0, 3], 3).is_err());
    assert!(validate_composition(&[2, 1], 3).is_ok());
    assert!(riffle_shuffles(&[0, 1, 2], &[1, 1]).is_err());
}

#[test]
fn test_shuffle_single_packet() {
    let shuffles = riffle_shuffles(&[3, 1, 2], &[3]).unwrap().collect::<Vec<_>>();
    assert_eq!(shuffles.len(), 1);
    assert_eq!(shuffles[0].axes(), &[3, 1, 2]);
    assert_eq!(shuffles[0].sign(), 1);
    assert!(shuffles[0].permutation().is_identity());

    let empty = riffle_shuffles(&[], &[]).unwrap().collect::<Vec<_>>();
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].sign(), 1);
}

#[test]
fn test_shuffle_full_antisymmetrisation() {
    let shuffles = riffle_shuffles(&[0, 1, 2], &[1, 1, 1])
        .unwrap()
        .map(|shuffle| (shuffle.axes().to_vec(), shuffle.sign()))
        .collect::<Vec<_>>();
    assert_eq!(
        shuffles,
        vec![
            (vec![0, 1, 2], 1),
            (vec![0, 2, 1], -1),
            (vec![1, 0, 2], -1),
            (vec![1, 2, 0], 1),
            (vec![2, 0, 1], 1),
            (vec![2, 1, 0], -1),
        ]
    );
}

#[test]
fn test_shuffle_reduced_1_2() {
    let shuffles = riffle_shuffles(&[0, 1, 2], &[1, 2])
        .unwrap()
        .map(|shuffle| (shuffle.axes().to_vec(), shuffle.sign()))
        .collect::<Vec<_>>();
    assert_eq!(
        shuffles,
        vec![(vec![0, 1, 2], 1), (vec![1, 0, 2], -1), (vec![1, 2, 0], 1)]
    );
}

#[test]
fn test_shuffle_reduced_2_2() {
    let shuffles = riffle_shuffles(&[4, 5, 6, 7], &[2, 2])
        .unwrap()
        .map(|shuffle| (shuffle.axes().to_vec(), shuffle.sign()))
        .collect::<Vec<_>>();
    assert_eq!(
        shuffles,
        vec![
            (vec![4, 5, 6, 7], 1),
            (vec![4, 6, 5, 7], -1),
            (vec![4, 6, 7, 5], 1),
            (vec![6, 4, 5, 7], 1),
            (vec![6, 4, 7, 5], -1),
            (vec![6, 7, 4, 5], 1),
        ]
    );
}

#[test]
fn test_shuffle_counts_and_signs() {
    let compositions: Vec<Vec<usize>> = vec![
        vec![1],
        vec![1, 1],
        vec![2, 1],
        vec![1, 3],
        vec![2, 2],
        vec![1, 2, 1],
        vec![2, 1, 2],
        vec![1, 1, 1, 1],
        vec![3, 2, 1],
    ];
    for composition in compositions {
        let naxes = composition.iter().sum::<usize>();
        let axes = (0..naxes).map(|i| 10 + i).collect::<Vec<_>>();
        let packet_bounds = composition
            .iter()
            .scan(0, |end, &size| {
                *end += size;
                Some(*end)
            })
            .collect::<Vec<_>>();
        let packet_of = |axis: usize| {
            packet_bounds
                .iter()
                .position(|&end| axis - 10 < end)
                .unwrap()
        };

        let iter = riffle_shuffles(&axes, &composition).unwrap();
        assert_eq!(iter.len(), n_shuffles(&composition));
        let shuffles = iter.collect::<Vec<_>>();
        assert_eq!(shuffles.len(), n_shuffles(&composition));

        // Every shuffle is distinct and preserves intra-packet order.
        let distinct = shuffles
            .iter()
            .map(|shuffle| shuffle.axes().to_vec())
            .collect::<HashSet<_>>();
        assert_eq!(distinct.len(), shuffles.len());
        for shuffle in shuffles.iter() {
            for packet in 0..composition.len() {
                let in_packet = shuffle
                    .axes()
                    .iter()
                    .filter(|&&axis| packet_of(axis) == packet)
                    .collect::<Vec<_>>();
                assert!(in_packet.windows(2).all(|pair| pair[0] < pair[1]));
            }
            assert_eq!(shuffle.sign(), inversion_sign(shuffle.axes(), packet_of));
            assert_eq!(shuffle.sign(), shuffle.permutation().parity());
        }
    }
    assert_eq!(n_shuffles(&[1, 1, 1, 1]), 24);
    assert_eq!(n_shuffles(&[3, 2, 1]), 60);
    assert_eq!(n_shuffles(&[]), 1);
}
