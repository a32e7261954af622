use criterion::{Criterion, criterion_group, criterion_main};
use gen2::select::Select;

fn gen_epc(len_bytes: usize) -> Vec<u8> {
    // Deterministic but non-trivial pattern
    (0..len_bytes).map(|i| (i * 31 % 256) as u8).collect()
}

fn bench_select_match(c: &mut Criterion) {
    for &epc_bytes in &[12usize, 32, 62] {
        let epc = gen_epc(epc_bytes);
        let bit_length = (epc_bytes * 8) as u16;

        // Whole-EPC comparison: the worst case, every bit is visited.
        let select = Select::epc(32, bit_length, &epc).unwrap();

        c.bench_function(&format!("match_{}_byte_epc", epc_bytes), |b| {
            b.iter(|| {
                let _ = select.matches(&epc).unwrap();
            })
        });
    }

    let epc = gen_epc(12);
    let select = Select::epc(16, 96, &[0u8; 12]).unwrap();
    c.bench_function("match_header_skip_mismatch", |b| {
        b.iter(|| {
            let _ = select.matches(&epc).unwrap();
        })
    });
}

criterion_group!(benches, bench_select_match);
criterion_main!(benches);
