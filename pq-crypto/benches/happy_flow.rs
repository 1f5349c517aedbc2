use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fake::Fake;
use pq_crypto::facade::{CryptoDemo, LoginOutcome};

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one‐time setup
    let demo = CryptoDemo::new();

    // passwords the shell would pass in, below the classical modulus
    let passwords: Vec<u64> = (0..32).map(|_| (0..3233u64).fake()).collect();

    c.bench_function("classical_happy_flow", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let password = passwords[i % passwords.len()];
            i += 1;

            // 2) register
            let stored = demo
                .classical_register(black_box(password))
                .expect("register");

            // 3) login
            let verified = demo
                .classical_login(black_box(password), &stored)
                .expect("login");
            assert!(black_box(verified));
        })
    });

    c.bench_function("quantum_safe_happy_flow", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let password = passwords[i % passwords.len()];
            let seed = i as u64;
            i += 1;

            // 2) register (fresh keypair every iteration, as the facade does)
            let registration = demo
                .quantum_safe_register(black_box(password), black_box(seed))
                .expect("register");

            // 3) login
            let outcome = demo.quantum_safe_login(
                black_box(password),
                &registration.secret_key_encoding,
                &registration.record,
            );
            assert_eq!(black_box(outcome), LoginOutcome::Success(password));
        })
    });

    c.bench_function("factoring_attack", |b| {
        b.iter(|| {
            let _outcome =
                demo.attack_classical(black_box(3233), black_box(17), black_box(2790));
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
