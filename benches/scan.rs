//! Benchmarks for the association stream.
//!
//! These benchmarks measure a full pass over generated template trees and
//! the per-line classification and resolution steps on their own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use template_graph::patterns::PatternSet;
use template_graph::resolve::TargetResolver;
use template_graph::strategy::{SearchStrategy, StrategyKind};
use template_graph::stream::Scanner;

/// Writes `num_files` templates under `root`, each extending a shared base
/// and including one partial among plain markup.
fn create_template_tree(root: &Path, num_files: usize) {
    fs::create_dir_all(root.join("partials")).unwrap();
    fs::write(root.join("base.html"), "<html>{% block body %}{% endblock %}</html>\n").unwrap();
    fs::write(root.join("partials/nav.html"), "<nav></nav>\n").unwrap();

    for i in 0..num_files {
        let dir = root.join(format!("section{}", i / 50));
        fs::create_dir_all(&dir).unwrap();
        let content = format!(
            "{{% extends \"base.html\" %}}\n{{% block body %}}\n<h1>Page {i}</h1>\n\
             {{% include \"partials/nav.html\" %}}\n{{% include widget_{i} %}}\n\
             <p>Lorem ipsum dolor sit amet.</p>\n{{% endblock %}}\n"
        );
        fs::write(dir.join(format!("page{i}.html")), content).unwrap();
    }
}

fn filesystem_strategy(root: &Path) -> Vec<SearchStrategy> {
    vec![SearchStrategy {
        kind: StrategyKind::Filesystem,
        dirs: vec![root.to_path_buf()],
    }]
}

fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");
    group.sample_size(20);

    for size in [10, 100, 500] {
        let temp_dir = TempDir::new().unwrap();
        create_template_tree(temp_dir.path(), size);
        let scanner = Scanner::new(filesystem_strategy(temp_dir.path())).unwrap();

        group.bench_with_input(BenchmarkId::new("files", size), &scanner, |b, scanner| {
            b.iter(|| scanner.associations().count())
        });
    }

    group.finish();
}

fn bench_line_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_steps");
    let temp_dir = TempDir::new().unwrap();
    create_template_tree(temp_dir.path(), 1);

    let patterns = PatternSet::new().unwrap();
    let resolver = TargetResolver::new(filesystem_strategy(temp_dir.path())).unwrap();

    group.bench_function("filter_plain_line", |b| {
        b.iter(|| patterns.filter_line(black_box("<p>Lorem ipsum dolor sit amet.</p>")))
    });

    group.bench_function("filter_directive_line", |b| {
        b.iter(|| patterns.filter_line(black_box(r#"{% extends "base.html" %}"#)))
    });

    group.bench_function("resolve_literal", |b| {
        b.iter(|| resolver.resolve(black_box(r#"{% include "partials/nav.html" %}"#)))
    });

    group.bench_function("resolve_variable", |b| {
        b.iter(|| resolver.resolve(black_box("{% include widget_name %}")))
    });

    group.finish();
}

criterion_group!(benches, bench_full_scan, bench_line_steps);
criterion_main!(benches);
