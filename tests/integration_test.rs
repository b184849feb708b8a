use approx;
use env_logger;
use itertools::Itertools;
use ndarray::{ArrayD, Axis, IxDyn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tensorutils::antisymmetrizer::Antisymmetrizer;
use tensorutils::contraction::{contract, einsum};
use tensorutils::spinorb::construct_spinorb_integrals;

fn norm(tensor: &ArrayD<f64>) -> f64 {
    tensor.map(|x| x * x).sum().sqrt()
}

/// Returns random two-electron integrals $`\braket{pq|rs}`$ over `n` real spatial orbitals with
/// the permutational symmetry of a real two-electron operator.
fn random_two_electron_integrals(n: usize, seed: u64) -> ArrayD<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Chemist's (pr|qs), symmetric under p <-> r, q <-> s and (pr) <-> (qs).
    let raw = ArrayD::<f64>::from_shape_fn(IxDyn(&[n, n, n, n]), |_| rng.gen_range(-1.0..1.0));
    let mut chem = raw.clone();
    let perms: [[usize; 4]; 7] = [
        [1, 0, 2, 3],
        [0, 1, 3, 2],
        [1, 0, 3, 2],
        [2, 3, 0, 1],
        [3, 2, 0, 1],
        [2, 3, 1, 0],
        [3, 2, 1, 0],
    ];
    for perm in perms {
        chem = chem + raw.view().permuted_axes(IxDyn(&perm));
    }
    // <pq|rs> = (pr|qs)
    chem.permuted_axes(IxDyn(&[0, 2, 1, 3]))
        .as_standard_layout()
        .into_owned()
}

#[test]
fn test_antisymmetrised_spinorb_integrals() {
    let _ = env_logger::builder().is_test(true).try_init();
    let n = 3;
    let g = random_two_electron_integrals(n, 1);
    let g_so = construct_spinorb_integrals(&g).unwrap();
    assert_eq!(g_so.shape(), &[2 * n; 4]);

    // <pq||rs> = <pq|rs> - <pq|sr>
    let a = "2/3".parse::<Antisymmetrizer>().unwrap();
    let g_as = (&a * &g_so).unwrap();

    // Antisymmetric under exchange of either pair of indices.
    approx::assert_relative_eq!(
        norm(&(&g_as + &g_as.view().permuted_axes(IxDyn(&[1, 0, 2, 3])))),
        0.0,
        epsilon = 1e-12,
        max_relative = 1e-12
    );
    approx::assert_relative_eq!(
        norm(&(&g_as + &g_as.view().permuted_axes(IxDyn(&[0, 1, 3, 2])))),
        0.0,
        epsilon = 1e-12,
        max_relative = 1e-12
    );

    // Same-spin blocks carry both Coulomb and exchange terms, opposite-spin blocks only one.
    for idx in (0..4).map(|_| 0..n).multi_cartesian_product() {
        let (p, q, r, s) = (idx[0], idx[1], idx[2], idx[3]);
        let aaaa = g_as[[p, q, r, s].as_slice()];
        assert!((aaaa - (g[[p, q, r, s].as_slice()] - g[[p, q, s, r].as_slice()])).abs() < 1e-12);
        let abab = g_as[[p, q + n, r, s + n].as_slice()];
        assert!((abab - g[[p, q, r, s].as_slice()]).abs() < 1e-12);
        let abba = g_as[[p, q + n, r + n, s].as_slice()];
        assert!((abba + g[[p, q, s, r].as_slice()]).abs() < 1e-12);
    }

    // The full antisymmetriser over both pairs gives 2 <pq||rs> on a tensor with pair symmetry.
    let a_full = "0/1|2/3".parse::<Antisymmetrizer>().unwrap();
    let g_full = (&a_full * &g_so).unwrap();
    approx::assert_relative_eq!(
        norm(&(&g_full - &(&g_as * 2.0))),
        0.0,
        epsilon = 1e-12,
        max_relative = 1e-12
    );
}

#[test]
fn test_antisymmetrised_energy_contraction() {
    let _ = env_logger::builder().is_test(true).try_init();
    let n = 3;
    let nocc = 2;
    let g = random_two_electron_integrals(n, 2);
    let g_so = construct_spinorb_integrals(&g).unwrap();
    let g_as = (0.5 * "2/3".parse::<Antisymmetrizer>().unwrap() * &g_so).unwrap();

    // Two-electron energy of a determinant occupying alpha orbitals 0..nocc and beta orbital 0.
    let occ = (0..nocc).chain([n]).collect::<Vec<_>>();
    let g_occ = g_as
        .select(Axis(0), &occ)
        .select(Axis(1), &occ)
        .select(Axis(2), &occ)
        .select(Axis(3), &occ);
    let delta = ArrayD::<f64>::from_shape_fn(IxDyn(&[occ.len(), occ.len()]), |idx| {
        if idx[0] == idx[1] {
            1.0
        } else {
            0.0
        }
    });
    let energy = contract(
        "ijkl,ik,jl->",
        &[g_occ.view(), delta.view(), delta.view()],
    )
    .unwrap();
    let energy_ref = einsum("ijij->", &[&g_occ]).unwrap();
    approx::assert_relative_eq!(energy.sum(), energy_ref.sum(), epsilon = 1e-12);

    let mut energy_explicit = 0.0;
    for (i, j) in (0..occ.len()).cartesian_product(0..occ.len()) {
        let (oi, oj) = (occ[i], occ[j]);
        let coulomb = g[[oi % n, oj % n, oi % n, oj % n].as_slice()];
        let exchange = if oi / n == oj / n {
            g[[oi % n, oj % n, oj % n, oi % n].as_slice()]
        } else {
            0.0
        };
        energy_explicit += 0.5 * (coulomb - exchange);
    }
    approx::assert_relative_eq!(energy.sum(), energy_explicit, epsilon = 1e-12);
}
