use super::*;
use curve::{Affine, CurveParams, Group, Projective, Sect163k1, Sect163r2, Sect233k1};
use num_bigint::{BigInt, BigUint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_scalar(rng: &mut StdRng, bits: usize) -> BigInt {
    let mut bytes = vec![0u8; bits.div_ceil(8)];
    rng.fill(&mut bytes[..]);
    BigInt::from(BigUint::from_bytes_le(&bytes) >> (8 * bytes.len() - bits))
}

fn reference<C: CurveParams>(k: &BigInt) -> Affine<C> {
    Projective::<C>::generator().scalar_mul(k).to_affine()
}

/// Small edge scalars, the order and its neighbours, and random ones.
fn sample_scalars<C: CurveParams>(rng: &mut StdRng) -> Vec<(BigInt, Affine<C>)> {
    let n = BigInt::from(C::order());
    let mut scalars = vec![
        BigInt::from(1),
        BigInt::from(2),
        BigInt::from(3),
        BigInt::from(5),
        BigInt::from(-7),
        &n - 1,
        n.clone(),
        BigInt::from(1) << (C::order_bits() - 1),
    ];
    for bits in [16, 64, C::order_bits() - 1, C::order_bits()] {
        scalars.push(random_scalar(rng, bits));
    }
    scalars.push(-random_scalar(rng, C::order_bits()));

    scalars
        .into_iter()
        .map(|k| {
            let expected = reference::<C>(&k);
            (k, expected)
        })
        .collect()
}

fn check_methods<C: CurveParams>(methods: &[Method], depths: &[usize], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = sample_scalars::<C>(&mut rng);

    for &method in methods {
        for &depth in depths {
            let table = FixedBaseTable::<C>::generator(method, depth).expect("table");
            assert_eq!(table.len(), method.table_len(C::order_bits(), depth));
            for (k, expected) in &samples {
                let got = table.mul(k).expect("mul");
                assert_eq!(
                    &got,
                    expected,
                    "{} on {} with depth {} and k = {}",
                    method,
                    C::NAME,
                    depth,
                    k
                );
                assert!(got.is_on_curve());
            }
        }
    }
}

const GENERAL_METHODS: [Method; 6] = [
    Method::Binary,
    Method::Yao,
    Method::NafWindow,
    Method::Comb,
    Method::CombDouble,
    Method::Lwnaf,
];

#[test]
fn test_methods_match_reference_on_sect163r2() {
    init_logging();
    check_methods::<Sect163r2>(&GENERAL_METHODS, &[2, 4, 5], 42);
}

#[test]
fn test_methods_match_reference_on_sect163k1() {
    init_logging();
    check_methods::<Sect163k1>(&Method::ALL, &[2, 4, 6], 43);
}

#[test]
fn test_methods_match_reference_on_sect233k1() {
    init_logging();
    check_methods::<Sect233k1>(&Method::ALL, &[3, 4, 5], 44);
}

#[test]
fn test_extreme_depths() {
    check_methods::<Sect163r2>(&[Method::Yao, Method::Comb, Method::CombDouble], &[1], 45);
    check_methods::<Sect163r2>(&[Method::NafWindow, Method::Comb, Method::Lwnaf], &[MAX_DEPTH], 46);
    check_methods::<Sect163k1>(&[Method::Koblitz], &[MIN_NAF_DEPTH, MAX_DEPTH], 47);
}

#[test]
fn test_zero_scalar() {
    let zero = BigInt::from(0);
    for method in GENERAL_METHODS {
        let table = FixedBaseTable::<Sect163r2>::generator(method, 4).unwrap();
        assert_eq!(table.mul(&zero).unwrap(), Affine::INFINITY);
    }
    let table = FixedBaseTable::<Sect233k1>::generator(Method::Koblitz, 4).unwrap();
    assert_eq!(table.mul(&zero).unwrap(), Affine::INFINITY);
}

#[test]
fn test_five_times_generator() {
    let g = Affine::<Sect163k1>::generator();
    let table = FixedBaseTable::new(&g, Method::Comb, 4).unwrap();
    let result = table.mul(&BigInt::from(5)).unwrap();
    assert_eq!(result, g + g + g + g + g);
}

#[test]
fn test_negative_scalar_negates() {
    let mut rng = StdRng::seed_from_u64(42);
    let k = random_scalar(&mut rng, 163);
    for method in Method::ALL {
        let table = FixedBaseTable::<Sect163k1>::generator(method, 4).unwrap();
        let positive = table.mul(&k).unwrap();
        let negative = table.mul(&-&k).unwrap();
        assert_eq!(negative, -positive);
        assert_eq!(positive + negative, Affine::INFINITY);
    }
}

#[test]
fn test_order_gives_identity() {
    let n = BigInt::from(Sect233k1::order());
    let g = Affine::<Sect233k1>::generator();
    for method in Method::ALL {
        let table = FixedBaseTable::<Sect233k1>::generator(method, 4).unwrap();
        assert_eq!(table.mul(&n).unwrap(), Affine::INFINITY);
        assert_eq!(table.mul(&(&n + 1)).unwrap(), g);
    }
}

#[test]
fn test_methods_agree_on_arbitrary_base() {
    let mut rng = StdRng::seed_from_u64(7);
    let base = reference::<Sect233k1>(&random_scalar(&mut rng, 64));
    let k = random_scalar(&mut rng, 232);
    let expected = base.scalar_mul(&k);

    for method in Method::ALL {
        let table = FixedBaseTable::new(&base, method, 5).unwrap();
        assert_eq!(table.mul(&k).unwrap(), expected, "{method}");
    }
}

#[test]
fn test_lwnaf_uses_tau_adic_table_on_koblitz_curves() {
    let lwnaf = FixedBaseTable::<Sect163k1>::generator(Method::Lwnaf, 5).unwrap();
    let koblitz = FixedBaseTable::<Sect163k1>::generator(Method::Koblitz, 5).unwrap();
    assert_eq!(lwnaf.points(), koblitz.points());

    // odd multiples on a general curve
    let g = Affine::<Sect163r2>::generator();
    let table = FixedBaseTable::new(&g, Method::Lwnaf, 4).unwrap();
    assert_eq!(table.points(), &[g, g.mul_u64(3), g.mul_u64(5), g.mul_u64(7)]);
}

#[test]
fn test_comb_table_shape() {
    let g = Affine::<Sect163r2>::generator();
    let table = FixedBaseTable::new(&g, Method::CombDouble, 3).unwrap();
    let points = table.points();
    // d = 55, e = 28
    let tooth = reference::<Sect163r2>(&(BigInt::from(1) << 55));
    assert_eq!(points[0], Affine::INFINITY);
    assert_eq!(points[1], g);
    assert_eq!(points[2], tooth);
    assert_eq!(points[3], g + tooth);
    assert_eq!(points[8], Affine::INFINITY);
    assert_eq!(points[9], reference::<Sect163r2>(&(BigInt::from(1) << 28)));
}

#[test]
fn test_short_tables() {
    let mut rng = StdRng::seed_from_u64(11);
    let g = Affine::<Sect163r2>::generator();
    for method in GENERAL_METHODS {
        let table = FixedBaseTable::with_bits(&g, method, 4, 30).unwrap();
        assert_eq!(table.bits(), 30);
        for _ in 0..4 {
            let k = random_scalar(&mut rng, 30);
            assert_eq!(table.mul(&k).unwrap(), reference::<Sect163r2>(&k));
        }
    }
}

#[test]
fn test_scalar_too_large() {
    let bits = Sect163k1::order_bits();
    for method in [
        Method::Binary,
        Method::Yao,
        Method::NafWindow,
        Method::Comb,
        Method::CombDouble,
    ] {
        for depth in [3, 4] {
            let table = FixedBaseTable::<Sect163k1>::generator(method, depth).unwrap();
            let capacity = method.scalar_capacity(bits, depth).unwrap();

            // the longest scalar the table covers
            let fits = (BigInt::from(1) << capacity) - 1;
            assert_eq!(table.mul(&fits).unwrap(), reference::<Sect163k1>(&fits));

            let too_long = (BigInt::from(1) << (capacity + 1)) - 1;
            assert_eq!(
                table.mul(&too_long),
                Err(MulFixError::ScalarTooLarge {
                    bits: capacity + 1,
                    capacity
                }),
                "{method} at depth {depth}"
            );
        }
    }
}

#[test]
fn test_unbounded_methods_accept_long_scalars() {
    let k = (BigInt::from(1) << 300) + 12345;
    for method in [Method::Lwnaf, Method::Koblitz] {
        let table = FixedBaseTable::<Sect163k1>::generator(method, 4).unwrap();
        assert_eq!(table.mul(&k).unwrap(), reference::<Sect163k1>(&k));
    }
}

#[test]
fn test_koblitz_rejects_general_curve() {
    assert_eq!(
        FixedBaseTable::<Sect163r2>::generator(Method::Koblitz, 4),
        Err(MulFixError::NotKoblitz)
    );
}

#[test]
fn test_invalid_window() {
    for (method, depth) in [
        (Method::Comb, 0),
        (Method::Yao, MAX_DEPTH + 1),
        (Method::Lwnaf, 1),
        (Method::Koblitz, 1),
    ] {
        assert_eq!(
            FixedBaseTable::<Sect163k1>::generator(method, depth),
            Err(MulFixError::InvalidWindow { method, depth })
        );
    }
}

#[test]
fn test_from_parts() {
    let table = FixedBaseTable::<Sect163k1>::generator(Method::Yao, 4).unwrap();
    let rebuilt = FixedBaseTable::from_parts(
        table.method(),
        table.depth(),
        table.bits(),
        table.points().to_vec(),
    )
    .unwrap();
    assert_eq!(rebuilt, table);

    let mut points = table.points().to_vec();
    points.pop();
    assert_eq!(
        FixedBaseTable::from_parts(Method::Yao, 4, 163, points),
        Err(MulFixError::TableMismatch {
            method: Method::Yao,
            expected: 41,
            found: 40
        })
    );

    // a comb table is not a valid Yao table
    let comb = FixedBaseTable::<Sect163k1>::generator(Method::Comb, 4).unwrap();
    assert!(FixedBaseTable::from_parts(Method::Yao, 4, 163, comb.points().to_vec()).is_err());
}

#[test]
fn test_serialized_table_still_multiplies() {
    let table = FixedBaseTable::<Sect233k1>::generator(Method::Koblitz, 5).unwrap();
    let bytes = bincode::serialize(&table).unwrap();
    let restored: FixedBaseTable<Sect233k1> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(restored, table);

    let k = BigInt::from(0x1234_5678_9abc_def0u64);
    assert_eq!(restored.mul(&k).unwrap(), reference::<Sect233k1>(&k));
}

#[test]
fn test_concurrent_reads() {
    let table = FixedBaseTable::<Sect163k1>::generator(Method::CombDouble, 4).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let scalars: Vec<BigInt> = (0..4).map(|_| random_scalar(&mut rng, 163)).collect();

    let results: Vec<Affine<Sect163k1>> = std::thread::scope(|scope| {
        let handles: Vec<_> = scalars
            .iter()
            .map(|k| {
                let table = &table;
                scope.spawn(move || table.mul(k).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (k, result) in scalars.iter().zip(results) {
        assert_eq!(result, reference::<Sect163k1>(k));
    }
}

#[test]
fn test_free_functions() {
    let k = BigInt::from(987_654_321u64);
    let g = Affine::<Sect163k1>::generator();
    let table = precompute(&g).unwrap();
    assert_eq!(table.method(), DEFAULT_METHOD);
    assert_eq!(table.depth(), DEFAULT_DEPTH);
    assert_eq!(mul_fix(&table, &k).unwrap(), reference::<Sect163k1>(&k));
    assert_eq!(mul_gen::<Sect163k1>(&k).unwrap(), reference::<Sect163k1>(&k));

    let table = precompute_with(&g, Method::NafWindow, 3).unwrap();
    assert_eq!(mul_fix(&table, &k).unwrap(), reference::<Sect163k1>(&k));
}

#[cfg(not(any(
    feature = "binary",
    feature = "yao",
    feature = "naf-window",
    feature = "comb",
    feature = "comb-double",
    feature = "lwnaf"
)))]
#[test]
fn test_default_method() {
    assert_eq!(DEFAULT_METHOD, Method::Lwnaf);
    assert_eq!(DEFAULT_DEPTH, 4);
}
