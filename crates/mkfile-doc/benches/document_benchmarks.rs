use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mkfile_doc::Document;
use mkfile_test_utils::MakefileBuilder;

/// A Makefile with `sections` banner sections of ten paragraphs each.
fn large_makefile(sections: usize) -> String {
    let mut builder = MakefileBuilder::new().paragraph("# Generated\nROOT = .");
    for section in 0..sections {
        builder = builder.section(&format!("Section {section}"));
        for target in 0..10 {
            builder = builder.paragraph(&format!(
                "target-{section}-{target}: dep \\\n  other\n\t@echo building {target}"
            ));
        }
    }
    builder.build()
}

fn parse_benchmark(c: &mut Criterion) {
    let source = large_makefile(50);
    c.bench_function("Document::parse (500 paragraphs)", |b| {
        b.iter(|| Document::parse(black_box(&source)))
    });
}

fn render_benchmark(c: &mut Criterion) {
    let doc = Document::parse(&large_makefile(50));
    c.bench_function("Document::render (500 paragraphs)", |b| {
        b.iter(|| black_box(&doc).render())
    });
}

fn lookup_benchmark(c: &mut Criterion) {
    let doc = Document::parse(&large_makefile(50));
    c.bench_function("Document::find_targets (last section)", |b| {
        b.iter(|| {
            let hits = doc.find_targets(black_box("target-49-9"));
            assert_eq!(hits.len(), 1);
        })
    });
}

criterion_group!(benches, parse_benchmark, render_benchmark, lookup_benchmark);
criterion_main!(benches);
