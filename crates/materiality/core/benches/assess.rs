use criterion::{black_box, criterion_group, criterion_main, Criterion};
use materiality_core::Classifier;
use materiality_types::{CompanyProfile, ScoringPolicy};

fn bench_assess(c: &mut Criterion) {
    let profiles: Vec<CompanyProfile> = CompanyProfile::all().collect();

    for policy in ScoringPolicy::ALL {
        let classifier = Classifier::new(policy);
        c.bench_function(&format!("assess_all_profiles_{policy}"), |b| {
            b.iter(|| {
                for profile in &profiles {
                    black_box(classifier.assess(black_box(profile)));
                }
            })
        });
    }
}

criterion_group!(benches, bench_assess);
criterion_main!(benches);
