use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pcm_lexer::Lexer;
use pcm_minifier::{Minifier, Reassembler};
use rand::Rng;

const BLOCKS: &[&str] = &[
    "<tr>\n    <td><?= $row['name'] ?></td>\n    <td><?= number_format( $row['total'], 2 ) ?></td>\n</tr>\n",
    "<?php\n// totals for the footer\n$sum = $sum + $row['total'];\n$count++;\n?>\n",
    "<?php if ($count % 2 === 0) { ?>\n<tr class=\"even\"></tr>\n<?php } else if ($count > 10) { ?>\n<tr></tr>\n<?php } ?>\n",
    "<?php\n$note = <<<TXT\n    Row {$count} of {$total}\n    TXT;\necho $note;\n?>\n",
];

fn generate_page(size_kb: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut page = String::with_capacity(size_kb * 1024);
    page.push_str("<!DOCTYPE html>\n<table>\n");
    while page.len() < size_kb * 1024 {
        page.push_str(BLOCKS[rng.gen_range(0..BLOCKS.len())]);
    }
    page.push_str("</table>\n");
    page
}

fn bench_minify(c: &mut Criterion) {
    let minifier = Minifier::new();
    for size in [1, 10, 100] {
        let page = generate_page(size);
        c.bench_function(&format!("minify_{size}kb"), |b| {
            b.iter(|| black_box(minifier.minify_text(black_box(&page))))
        });
    }
}

fn bench_reassemble(c: &mut Criterion) {
    let segments = Lexer::new().lex(&generate_page(10)).unwrap();
    let reassembler = Reassembler::new();
    c.bench_function("reassemble_10kb", |b| {
        b.iter(|| black_box(reassembler.reassemble(black_box(&segments))))
    });
}

criterion_group!(benches, bench_minify, bench_reassemble);
criterion_main!(benches);
